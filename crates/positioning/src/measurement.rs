use thiserror::Error;

/// One batch of distance readings, keyed by anchor id.
///
/// Ids are unique. Readings keep the order they were first inserted in,
/// which decides which approximate anchors survive the cap in
/// [`LocationModel`](crate::LocationModel).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementSet {
    readings: Vec<(String, f64)>,
}

/// Errors that can occur when recording a distance reading.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeasurementError {
    #[error("distance to anchor {id:?} is not finite: {distance}")]
    NonFinite { id: String, distance: f64 },

    #[error("distance to anchor {id:?} is negative: {distance}")]
    Negative { id: String, distance: f64 },
}

impl MeasurementSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `(id, distance)` pairs; later duplicates replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns the first invalid reading.
    pub fn from_readings<I, S>(readings: I) -> Result<Self, MeasurementError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (id, distance) in readings {
            set.insert(id, distance)?;
        }
        Ok(set)
    }

    /// Records a distance in meters, returning the reading it replaced.
    ///
    /// A replaced reading keeps its original position in the set.
    ///
    /// # Errors
    ///
    /// Returns an error if `distance` is `NaN`, infinite, or negative.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        distance: f64,
    ) -> Result<Option<f64>, MeasurementError> {
        let id = id.into();
        if !distance.is_finite() {
            return Err(MeasurementError::NonFinite { id, distance });
        }
        if distance < 0.0 {
            return Err(MeasurementError::Negative { id, distance });
        }

        if let Some((_, existing)) = self.readings.iter_mut().find(|(k, _)| *k == id) {
            return Ok(Some(std::mem::replace(existing, distance)));
        }
        self.readings.push((id, distance));
        Ok(None)
    }

    /// Returns the reading for an anchor.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<f64> {
        self.readings
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, d)| *d)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Iterates over `(id, distance)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.readings.iter().map(|(k, d)| (k.as_str(), *d))
    }
}
