use thiserror::Error;

use crate::Point;

/// An axis-aligned box in `N`-dimensional space.
///
/// Both corners must be finite. Ordering (`min[i] <= max[i]`) is the caller's
/// responsibility and is not checked: a reversed axis simply contains no
/// points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bounds<const N: usize> {
    min: Point<N>,
    max: Point<N>,
}

/// Errors that can occur when constructing [`Bounds`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    #[error("lower bound on axis {axis} is not finite")]
    NonFiniteMin { axis: usize },

    #[error("upper bound on axis {axis} is not finite")]
    NonFiniteMax { axis: usize },
}

impl<const N: usize> Bounds<N> {
    /// Creates a box from its lower and upper corners.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first axis with a `NaN` or infinite corner.
    pub fn new(min: Point<N>, max: Point<N>) -> Result<Self, BoundsError> {
        if let Some(axis) = min.coords().iter().position(|c| !c.is_finite()) {
            return Err(BoundsError::NonFiniteMin { axis });
        }
        if let Some(axis) = max.coords().iter().position(|c| !c.is_finite()) {
            return Err(BoundsError::NonFiniteMax { axis });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower corner.
    #[must_use]
    pub fn min(&self) -> Point<N> {
        self.min
    }

    /// Returns the upper corner.
    #[must_use]
    pub fn max(&self) -> Point<N> {
        self.max
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn midpoint(&self) -> Point<N> {
        (self.min + self.max) * 0.5
    }

    /// Returns `true` if every coordinate of `x` lies within the box, edges included.
    ///
    /// A point with a `NaN` coordinate is never contained.
    #[must_use]
    pub fn contains(&self, x: &Point<N>) -> bool {
        (0..N).all(|i| x[i] >= self.min[i] && x[i] <= self.max[i])
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Bounds<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        #[derive(serde::Deserialize)]
        struct Corners<const N: usize> {
            min: Point<N>,
            max: Point<N>,
        }

        let corners = Corners::<N>::deserialize(deserializer)?;
        Self::new(corners.min, corners.max).map_err(D::Error::custom)
    }
}
