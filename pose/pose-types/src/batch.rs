//! Row-major batches with arbitrary leading dimensions.
//!
//! A [`Batch`] stores the leading (batch) dimensions of a tensor explicitly and
//! carries the fixed trailing dimensions in its element type. A rotation-vector
//! tensor of shape `(2, 15, 3)` is a `Batch<Vector3<T>>` with `dims == [2, 15]`.

use rayon::prelude::*;

use crate::error::{ShapeError, ShapeResult};

/// A flat, row-major collection of elements indexed by leading batch dimensions.
///
/// The number of elements always equals the product of `dims`. An empty `dims`
/// describes a single unbatched element.
///
/// # Example
///
/// ```
/// use pose_types::{Batch, Vector3};
///
/// let points = Batch::new(
///     vec![1, 2],
///     vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)],
/// )
/// .unwrap();
///
/// assert_eq!(points.dims(), &[1, 2]);
/// assert_eq!(points.get(&[0, 1]), Some(&Vector3::new(1.0, 0.0, 0.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<E> {
    dims: Vec<usize>,
    data: Vec<E>,
}

impl<E> Batch<E> {
    /// Creates a batch, checking that `data` fills `dims` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::ElementCount`] if `data.len()` is not the product
    /// of `dims`.
    pub fn new(dims: Vec<usize>, data: Vec<E>) -> ShapeResult<Self> {
        let expected = dims.iter().product::<usize>();
        if expected != data.len() {
            return Err(ShapeError::ElementCount {
                dims,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Creates a rank-1 batch holding every element of `data`.
    #[must_use]
    pub fn from_vec(data: Vec<E>) -> Self {
        Self {
            dims: vec![data.len()],
            data,
        }
    }

    /// Creates a batch by calling `f` with each flat row-major index.
    #[must_use]
    pub fn from_fn<F>(dims: Vec<usize>, f: F) -> Self
    where
        F: FnMut(usize) -> E,
    {
        let len = dims.iter().product::<usize>();
        Self {
            dims,
            data: (0..len).map(f).collect(),
        }
    }

    /// Returns the leading dimensions.
    #[must_use]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the number of leading dimensions.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Returns the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the batch holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the elements in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    /// Returns the elements in row-major order for in-place edits.
    ///
    /// The dimensions stay fixed, so only element values can change.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.data
    }

    /// Consumes the batch and returns its elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.data
    }

    /// Consumes the batch and returns `(dims, elements)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<usize>, Vec<E>) {
        (self.dims, self.data)
    }

    /// Iterates over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.data.iter()
    }

    /// Reinterprets the batch with new leading dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::ElementCount`] if the new dimensions hold a
    /// different number of elements.
    pub fn reshape(self, dims: Vec<usize>) -> ShapeResult<Self> {
        Self::new(dims, self.data)
    }

    /// Returns the element at a multi-index, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: &[usize]) -> Option<&E> {
        if index.len() != self.dims.len() {
            return None;
        }
        let mut offset = 0;
        for (&i, &extent) in index.iter().zip(&self.dims) {
            if i >= extent {
                return None;
            }
            offset = offset * extent + i;
        }
        self.data.get(offset)
    }

    /// Extent of the first leading dimension (1 for an unbatched element).
    #[must_use]
    pub fn outer_len(&self) -> usize {
        self.dims.first().copied().unwrap_or(1)
    }

    /// Number of elements under one index of the first dimension.
    #[must_use]
    pub fn inner_len(&self) -> usize {
        self.dims.iter().skip(1).product()
    }

    /// Iterates over the sub-slices under each index of the first dimension.
    ///
    /// Yields nothing when the inner extent is zero.
    pub fn outer_chunks(&self) -> std::slice::Chunks<'_, E> {
        self.data.chunks(self.inner_len().max(1))
    }

    /// Checks that the batch has exactly `rank` leading dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::Rank`] otherwise.
    pub fn ensure_rank(&self, rank: usize) -> ShapeResult<()> {
        if self.dims.len() == rank {
            Ok(())
        } else {
            Err(ShapeError::Rank {
                expected: rank,
                actual: self.dims.len(),
            })
        }
    }

    /// Applies `f` to every element, keeping the dimensions.
    #[must_use]
    pub fn map<U, F>(&self, f: F) -> Batch<U>
    where
        F: FnMut(&E) -> U,
    {
        Batch {
            dims: self.dims.clone(),
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<E: Sync> Batch<E> {
    /// Applies `f` to every element in parallel, keeping the dimensions.
    ///
    /// Output order matches input order.
    #[must_use]
    pub fn par_map<U, F>(&self, f: F) -> Batch<U>
    where
        U: Send,
        F: Fn(&E) -> U + Sync + Send,
    {
        Batch {
            dims: self.dims.clone(),
            data: self.data.par_iter().map(f).collect(),
        }
    }
}

impl<'a, E> IntoIterator for &'a Batch<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
