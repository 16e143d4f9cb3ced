//! Closed-form conversions between rotation representations.
//!
//! All functions are generic over the scalar type, so the same code serves
//! single and double precision. Batched variants evaluate element-wise in
//! parallel and keep the leading dimensions of their input.
//!
//! # Quaternion to matrix
//!
//! With `q = (w, x, y, z)` and `s = 2 / (w² + x² + y² + z²)`:
//!
//! ```text
//! R = | 1 - s(y² + z²)   s(xy - zw)       s(xz + yw)     |
//!     | s(xy + zw)       1 - s(x² + z²)   s(yz - xw)     |
//!     | s(xz - yw)       s(yz + xw)       1 - s(x² + y²) |
//! ```
//!
//! The `2 / |q|²` factor normalizes implicitly, so any non-zero multiple of a
//! unit quaternion yields the same matrix.
//!
//! # Rotation vector to quaternion
//!
//! ```text
//! θ = |v|
//! q = (cos(θ/2), v · sin(θ/2)/θ)
//! ```
//!
//! Below [`SMALL_ANGLE_THRESHOLD`], `sin(θ/2)/θ` is replaced by its Taylor
//! expansion `1/2 - θ²/48`.

use nalgebra::{Matrix3, RealField, Vector3, Vector4};
use pose_types::Batch;

/// Rotation angle below which the Taylor expansion of `sin(θ/2)/θ` is used.
pub const SMALL_ANGLE_THRESHOLD: f64 = 1e-6;

/// Converts a quaternion `(w, x, y, z)` to a rotation matrix.
///
/// The quaternion does not need unit norm. A zero quaternion yields
/// non-finite entries.
///
/// # Example
///
/// ```
/// use nalgebra::{Matrix3, Vector4};
/// use pose_rotation::quaternion_to_matrix;
///
/// let r = quaternion_to_matrix(&Vector4::new(2.0_f64, 0.0, 0.0, 0.0));
/// assert_eq!(r, Matrix3::identity());
/// ```
#[must_use]
pub fn quaternion_to_matrix<T: RealField + Copy>(quat: &Vector4<T>) -> Matrix3<T> {
    let (w, x, y, z) = (quat[0], quat[1], quat[2], quat[3]);
    let two_s = nalgebra::convert::<f64, T>(2.0) / quat.norm_squared();
    let one = T::one();

    Matrix3::new(
        one - two_s * (y * y + z * z),
        two_s * (x * y - z * w),
        two_s * (x * z + y * w),
        two_s * (x * y + z * w),
        one - two_s * (x * x + z * z),
        two_s * (y * z - x * w),
        two_s * (x * z - y * w),
        two_s * (y * z + x * w),
        one - two_s * (x * x + y * y),
    )
}

/// Evaluates `sin(θ/2)/θ` for a non-negative angle.
///
/// Both the exact quotient and the small-angle expansion are computed and the
/// result is picked by a mask, so the exact branch never divides by zero.
#[must_use]
pub fn sin_half_angle_over_angle<T: RealField + Copy>(angle: T) -> T {
    let half = nalgebra::convert::<f64, T>(0.5);
    let small = angle < nalgebra::convert::<f64, T>(SMALL_ANGLE_THRESHOLD);

    // sin(x/2) ≈ x/2 - (x/2)³/6, so sin(x/2)/x ≈ 1/2 - x²/48
    let taylor = half - angle * angle / nalgebra::convert::<f64, T>(48.0);

    let safe_angle = select(small, T::one(), angle);
    let exact = (safe_angle * half).sin() / safe_angle;

    select(small, taylor, exact)
}

#[inline]
fn select<T>(mask: bool, if_set: T, if_clear: T) -> T {
    if mask {
        if_set
    } else {
        if_clear
    }
}

/// Converts an axis-angle rotation vector to a quaternion `(w, x, y, z)`.
///
/// The magnitude of `rotvec` is the rotation angle in radians. A zero vector
/// maps exactly to the identity quaternion `(1, 0, 0, 0)`.
#[must_use]
pub fn rotation_vector_to_quaternion<T: RealField + Copy>(rotvec: &Vector3<T>) -> Vector4<T> {
    let angle = rotvec.norm();
    let half_angle = angle * nalgebra::convert::<f64, T>(0.5);
    let xyz = rotvec * sin_half_angle_over_angle(angle);

    Vector4::new(half_angle.cos(), xyz.x, xyz.y, xyz.z)
}

/// Converts an axis-angle rotation vector to a rotation matrix.
#[must_use]
pub fn rotation_vector_to_matrix<T: RealField + Copy>(rotvec: &Vector3<T>) -> Matrix3<T> {
    quaternion_to_matrix(&rotation_vector_to_quaternion(rotvec))
}

/// Converts a batch of quaternions to rotation matrices.
#[must_use]
pub fn quaternions_to_matrices<T: RealField + Copy>(
    quats: &Batch<Vector4<T>>,
) -> Batch<Matrix3<T>> {
    quats.par_map(quaternion_to_matrix)
}

/// Converts a batch of rotation vectors to quaternions.
#[must_use]
pub fn rotation_vectors_to_quaternions<T: RealField + Copy>(
    rotvecs: &Batch<Vector3<T>>,
) -> Batch<Vector4<T>> {
    rotvecs.par_map(rotation_vector_to_quaternion)
}

/// Converts a batch of rotation vectors to rotation matrices.
#[must_use]
pub fn rotation_vectors_to_matrices<T: RealField + Copy>(
    rotvecs: &Batch<Vector3<T>>,
) -> Batch<Matrix3<T>> {
    rotvecs.par_map(rotation_vector_to_matrix)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Rotation3, UnitQuaternion};

    fn sample_quaternions() -> Vec<Vector4<f64>> {
        vec![
            Vector4::new(1.0, 0.0, 0.0, 0.0),
            Vector4::new(0.0, 1.0, 0.0, 0.0),
            Vector4::new(0.5, 0.5, 0.5, 0.5),
            Vector4::new(0.9, -0.1, 0.3, 0.2),
            Vector4::new(-0.2, 0.7, -0.4, 0.1),
        ]
    }

    #[test]
    fn unit_quaternion_gives_orthonormal_matrix() {
        for q in sample_quaternions() {
            let q = q.normalize();
            let r = quaternion_to_matrix(&q);

            assert_relative_eq!(r.transpose() * r, Matrix3::identity(), epsilon = 1e-12);
            assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn quaternion_to_matrix_is_scale_invariant() {
        for q in sample_quaternions() {
            let r = quaternion_to_matrix(&q);
            for c in [3.5, -2.0, 1e-3] {
                assert_relative_eq!(quaternion_to_matrix(&(q * c)), r, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn quaternion_to_matrix_matches_nalgebra() {
        let q = Vector4::new(0.9, -0.1, 0.3, 0.2);
        let quat = nalgebra::Quaternion::new(q[0], q[1], q[2], q[3]);
        let unit = UnitQuaternion::from_quaternion(quat);

        let expected = unit.to_rotation_matrix().into_inner();
        assert_relative_eq!(quaternion_to_matrix(&q), expected, epsilon = 1e-12);
    }

    #[test]
    fn zero_rotation_vector_is_identity_quaternion() {
        let q = rotation_vector_to_quaternion(&Vector3::<f64>::zeros());
        assert_eq!(q, Vector4::new(1.0, 0.0, 0.0, 0.0));

        let q32 = rotation_vector_to_quaternion(&Vector3::<f32>::zeros());
        assert_eq!(q32, Vector4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn small_angle_branch_is_continuous() {
        let below = SMALL_ANGLE_THRESHOLD * (1.0 - 1e-9);
        let above = SMALL_ANGLE_THRESHOLD * (1.0 + 1e-9);

        let f_below = sin_half_angle_over_angle(below);
        let f_above = sin_half_angle_over_angle(above);
        assert_relative_eq!(f_below, f_above, epsilon = 1e-14);
        assert_relative_eq!(f_below, 0.5, epsilon = 1e-12);

        let axis = Vector3::new(1.0, 2.0, -2.0).normalize();
        let q_below = rotation_vector_to_quaternion(&(axis * below));
        let q_above = rotation_vector_to_quaternion(&(axis * above));
        assert_relative_eq!(q_below, q_above, epsilon = 1e-14);
    }

    #[test]
    fn taylor_branch_never_produces_nan() {
        for angle in [0.0, 1e-300, 1e-12, 9.99e-7] {
            let f: f64 = sin_half_angle_over_angle(angle);
            assert!(f.is_finite());
            assert_relative_eq!(f, 0.5, epsilon = 1e-12);
        }
        let f32_val = sin_half_angle_over_angle(0.0_f32);
        assert_relative_eq!(f32_val, 0.5_f32);
    }

    #[test]
    fn large_angle_matches_closed_form() {
        let angle = 2.5_f64;
        assert_relative_eq!(
            sin_half_angle_over_angle(angle),
            (angle / 2.0).sin() / angle,
            epsilon = 1e-15
        );
    }

    #[test]
    fn rotation_vector_matches_nalgebra_exponential_map() {
        let v = Vector3::new(0.3, -1.1, 0.7);
        let expected = Rotation3::new(v).into_inner();
        assert_relative_eq!(rotation_vector_to_matrix(&v), expected, epsilon = 1e-12);
    }

    #[test]
    fn rotation_vector_composed_with_inverse_is_identity() {
        for v in [
            Vector3::new(0.3, -1.1, 0.7),
            Vector3::new(3.0, 0.0, 0.0),
            Vector3::new(1e-8, 2e-8, 0.0),
            Vector3::new(-5.0, 4.0, 2.0),
        ] {
            let r = rotation_vector_to_matrix(&v);
            let r_inv = rotation_vector_to_matrix(&(-v));
            assert_relative_eq!(r * r_inv, Matrix3::identity(), epsilon = 1e-12);
        }
    }

    #[test]
    fn single_precision_is_orthonormal() {
        let v = Vector3::new(0.4_f32, 0.2, -0.9);
        let r = rotation_vector_to_matrix(&v);
        assert_relative_eq!(r.transpose() * r, Matrix3::identity(), epsilon = 1e-5);
    }

    #[test]
    fn batched_conversions_keep_dims_and_order() {
        let rotvecs = Batch::new(
            vec![2, 3],
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(0.1, 0.0, 0.0),
                Vector3::new(0.0, 0.2, 0.0),
                Vector3::new(0.0, 0.0, 0.3),
                Vector3::new(1e-9, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 1.0),
            ],
        )
        .unwrap();

        let quats = rotation_vectors_to_quaternions(&rotvecs);
        let mats = rotation_vectors_to_matrices(&rotvecs);
        let via_quats = quaternions_to_matrices(&quats);

        assert_eq!(quats.dims(), &[2, 3]);
        assert_eq!(mats.dims(), &[2, 3]);
        for ((v, m), mq) in rotvecs.iter().zip(mats.iter()).zip(via_quats.iter()) {
            assert_relative_eq!(*m, rotation_vector_to_matrix(v), epsilon = 1e-15);
            assert_relative_eq!(*m, *mq, epsilon = 1e-15);
        }
    }
}
