use wayfind_core::Point;

/// How far ranging to an anchor can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Quality {
    /// Ranging is reliable; readings are always used.
    Exact,

    /// Ranging is rough; only a capped number of readings are used, and only
    /// while too few exact anchors are available.
    Approximate,
}

/// A fixed radio landmark at a known location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    /// Identifier matching the keys of a [`MeasurementSet`](crate::MeasurementSet).
    pub id: String,

    /// Location in floor coordinates, in meters.
    pub location: Point<3>,

    pub quality: Quality,
}

impl Anchor {
    #[must_use]
    pub fn new(id: impl Into<String>, location: Point<3>, quality: Quality) -> Self {
        Self {
            id: id.into(),
            location,
            quality,
        }
    }

    #[must_use]
    pub fn exact(id: impl Into<String>, location: [f64; 3]) -> Self {
        Self::new(id, Point::new(location), Quality::Exact)
    }

    #[must_use]
    pub fn approximate(id: impl Into<String>, location: [f64; 3]) -> Self {
        Self::new(id, Point::new(location), Quality::Approximate)
    }
}
