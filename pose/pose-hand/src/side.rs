//! Hand side selection and per-side payloads.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::HandError;

/// Which hand(s) a composer handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HandSide {
    /// Left hand only.
    Left,
    /// Right hand only.
    Right,
    /// Both hands, each with its own pose.
    #[default]
    Both,
}

impl HandSide {
    /// Configuration name of the side.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
        }
    }

    /// Returns `true` if the left hand is handled.
    #[must_use]
    pub const fn includes_left(&self) -> bool {
        matches!(self, Self::Left | Self::Both)
    }

    /// Returns `true` if the right hand is handled.
    #[must_use]
    pub const fn includes_right(&self) -> bool {
        matches!(self, Self::Right | Self::Both)
    }
}

impl fmt::Display for HandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HandSide {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "both" => Ok(Self::Both),
            _ => {
                error!(side = s, "unsupported side");
                Err(HandError::InvalidSide(s.to_string()))
            }
        }
    }
}

/// A value per handled hand.
///
/// A single-sided variant carries no placeholder for the other hand: the
/// absent side is absent, not zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Hands<P> {
    /// Left hand only.
    Left(P),
    /// Right hand only.
    Right(P),
    /// Both hands.
    Both {
        /// Left hand value.
        left: P,
        /// Right hand value.
        right: P,
    },
}

impl<P> Hands<P> {
    /// The side(s) present.
    #[must_use]
    pub const fn side(&self) -> HandSide {
        match self {
            Self::Left(_) => HandSide::Left,
            Self::Right(_) => HandSide::Right,
            Self::Both { .. } => HandSide::Both,
        }
    }

    /// The left hand value, if present.
    #[must_use]
    pub const fn left(&self) -> Option<&P> {
        match self {
            Self::Left(p) | Self::Both { left: p, .. } => Some(p),
            Self::Right(_) => None,
        }
    }

    /// The right hand value, if present.
    #[must_use]
    pub const fn right(&self) -> Option<&P> {
        match self {
            Self::Right(p) | Self::Both { right: p, .. } => Some(p),
            Self::Left(_) => None,
        }
    }

    /// Applies a fallible function to each present value.
    ///
    /// `f` receives [`HandSide::Left`] or [`HandSide::Right`] alongside the
    /// value. The left hand is processed first.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<Q, E, F>(self, mut f: F) -> Result<Hands<Q>, E>
    where
        F: FnMut(HandSide, P) -> Result<Q, E>,
    {
        Ok(match self {
            Self::Left(p) => Hands::Left(f(HandSide::Left, p)?),
            Self::Right(p) => Hands::Right(f(HandSide::Right, p)?),
            Self::Both { left, right } => {
                let left = f(HandSide::Left, left)?;
                let right = f(HandSide::Right, right)?;
                Hands::Both { left, right }
            }
        })
    }
}
