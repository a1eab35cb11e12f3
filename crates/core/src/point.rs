use std::ops::{Add, Index, Mul, Sub};

/// A point in `N`-dimensional real space.
///
/// Supports elementwise addition and subtraction, scaling by an `f64`, and
/// indexed reads. Equality is plain `f64` equality per coordinate; use
/// [`ProbeTrace`](crate::ProbeTrace) when points need to act as keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize>([f64; N]);

impl<const N: usize> Point<N> {
    /// The dimension of the space.
    pub const DIM: usize = N;

    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(coords: [f64; N]) -> Self {
        Self(coords)
    }

    /// Creates a point with every coordinate set to `value`.
    #[must_use]
    pub const fn splat(value: f64) -> Self {
        Self([value; N])
    }

    /// Returns the coordinates.
    #[must_use]
    pub const fn coords(&self) -> &[f64; N] {
        &self.0
    }

    /// Consumes the point and returns its coordinates.
    #[must_use]
    pub const fn into_coords(self) -> [f64; N] {
        self.0
    }

    /// Returns `true` if no coordinate is `NaN` or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Returns `true` if any coordinate is `NaN`.
    #[must_use]
    pub fn has_nan(&self) -> bool {
        self.0.iter().any(|c| c.is_nan())
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Largest absolute coordinate difference to `other`.
    #[must_use]
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Sums a collection of points.
    ///
    /// The sum of nothing is the origin.
    pub fn sum<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
    {
        points
            .into_iter()
            .fold(Self::splat(0.0), |acc, p| acc + *p)
    }

    /// Returns the arithmetic mean of a collection of points.
    ///
    /// Returns `None` if the collection is empty.
    pub fn mean<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut count = 0_usize;
        let sum = points.into_iter().fold(Self::splat(0.0), |acc, p| {
            count += 1;
            acc + *p
        });

        #[allow(clippy::cast_precision_loss)]
        let scale = (count > 0).then(|| 1.0 / count as f64)?;
        Some(sum * scale)
    }

    /// Applies `f` to every coordinate pair of `self` and `other`.
    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut out = self.0;
        for (o, b) in out.iter_mut().zip(other.0) {
            *o = f(*o, b);
        }
        Self(out)
    }
}

impl<const N: usize> Default for Point<N> {
    fn default() -> Self {
        Self::splat(0.0)
    }
}

impl<const N: usize> From<[f64; N]> for Point<N> {
    fn from(coords: [f64; N]) -> Self {
        Self(coords)
    }
}

impl<const N: usize> From<Point<N>> for [f64; N] {
    fn from(point: Point<N>) -> Self {
        point.0
    }
}

impl<const N: usize> Index<usize> for Point<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const N: usize> Add for Point<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<const N: usize> Sub for Point<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<const N: usize> Mul<f64> for Point<N> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0.map(|c| c * rhs))
    }
}

impl<const N: usize> Mul<Point<N>> for f64 {
    type Output = Point<N>;

    fn mul(self, rhs: Point<N>) -> Point<N> {
        rhs * self
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Point<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, const N: usize> serde::Deserialize<'de> for Point<N> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        let coords = Vec::<f64>::deserialize(deserializer)?;
        let len = coords.len();
        let coords: [f64; N] = coords.try_into().map_err(|_| {
            let expected = format!("{N} coordinates");
            D::Error::invalid_length(len, &expected.as_str())
        })?;
        Ok(Self(coords))
    }
}
