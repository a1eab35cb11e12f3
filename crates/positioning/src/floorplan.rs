use std::collections::HashSet;

use thiserror::Error;
use wayfind_core::Bounds;

use crate::Anchor;

/// One floor: its bounding box and the anchors installed on it.
///
/// Anchor ids are unique and every anchor location is finite.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFloorplan"))]
pub struct Floorplan {
    bounds: Bounds<3>,
    anchors: Vec<Anchor>,
}

/// Errors that can occur when assembling a [`Floorplan`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FloorplanError {
    #[error("floorplan has no anchors")]
    NoAnchors,

    #[error("anchor id {0:?} appears more than once")]
    DuplicateAnchor(String),

    #[error("anchor {0:?} has a non-finite location")]
    NonFiniteLocation(String),
}

impl Floorplan {
    /// Creates a floorplan.
    ///
    /// # Errors
    ///
    /// Returns an error if `anchors` is empty, an id repeats, or a location
    /// is not finite.
    pub fn new(bounds: Bounds<3>, anchors: Vec<Anchor>) -> Result<Self, FloorplanError> {
        if anchors.is_empty() {
            return Err(FloorplanError::NoAnchors);
        }

        let mut seen = HashSet::with_capacity(anchors.len());
        for anchor in &anchors {
            if !anchor.location.is_finite() {
                return Err(FloorplanError::NonFiniteLocation(anchor.id.clone()));
            }
            if !seen.insert(anchor.id.as_str()) {
                return Err(FloorplanError::DuplicateAnchor(anchor.id.clone()));
            }
        }

        Ok(Self { bounds, anchors })
    }

    /// Returns the floor's bounding box.
    #[must_use]
    pub fn bounds(&self) -> Bounds<3> {
        self.bounds
    }

    #[must_use]
    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Looks up an anchor by id.
    #[must_use]
    pub fn anchor(&self, id: &str) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.id == id)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFloorplan {
    bounds: Bounds<3>,
    anchors: Vec<Anchor>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFloorplan> for Floorplan {
    type Error = FloorplanError;

    fn try_from(raw: RawFloorplan) -> Result<Self, Self::Error> {
        Self::new(raw.bounds, raw.anchors)
    }
}
