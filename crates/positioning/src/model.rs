use thiserror::Error;
use tracing::debug;
use wayfind_core::{Bounds, Objective, Point, ProbeTrace};

use crate::{Anchor, CostConfig, Floorplan, MeasurementSet, Quality};

/// Multilateration cost over a floor's bounding box.
///
/// Built from one [`MeasurementSet`]. Exact readings are always kept;
/// approximate readings are kept in set order until
/// [`CostConfig::approximate_limit`] is reached. The cost of a candidate
/// position is:
///
/// - `+∞` outside the floor's bounds,
/// - the mean squared exact residual if there are more than
///   [`CostConfig::exact_quorum`] exact readings,
/// - otherwise `exact_weight × mean(exact) + mean(approximate)`, where the
///   mean of no readings is `0`.
///
/// Residuals are `predicted - measured`, clamped from above at
/// [`CostConfig::residual_cap`]. Every evaluated position is recorded in the
/// model's [`ProbeTrace`].
#[derive(Debug, Clone)]
pub struct LocationModel<'a> {
    bounds: Bounds<3>,
    readings: Vec<Reading<'a>>,
    config: CostConfig,
    probes: ProbeTrace<3>,
}

#[derive(Debug, Clone, Copy)]
struct Reading<'a> {
    anchor: &'a Anchor,
    distance: f64,
}

/// Errors that can occur when building a [`LocationModel`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("measurement set is empty")]
    NoMeasurements,

    #[error("measurement refers to unknown anchor {0:?}")]
    UnknownAnchor(String),

    #[error("no measurement survived filtering")]
    NoUsableMeasurements,
}

/// Errors that can occur when evaluating a [`LocationModel`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CostError {
    #[error("candidate position has a NaN coordinate: {0:?}")]
    NanCandidate([f64; 3]),
}

impl<'a> LocationModel<'a> {
    /// Builds the cost model for one batch of readings.
    ///
    /// # Errors
    ///
    /// Returns an error if `measurements` is empty, names an anchor the
    /// floorplan doesn't have, or nothing is left after filtering.
    pub fn new(
        floorplan: &'a Floorplan,
        measurements: &MeasurementSet,
        config: CostConfig,
    ) -> Result<Self, ModelError> {
        if measurements.is_empty() {
            return Err(ModelError::NoMeasurements);
        }

        let mut readings = Vec::with_capacity(measurements.len());
        let mut approximate = 0_usize;
        for (id, distance) in measurements.iter() {
            let anchor = floorplan
                .anchor(id)
                .ok_or_else(|| ModelError::UnknownAnchor(id.to_owned()))?;

            if anchor.quality == Quality::Approximate {
                approximate += 1;
                if approximate > config.approximate_limit() {
                    continue;
                }
            }
            readings.push(Reading { anchor, distance });
        }

        if approximate > config.approximate_limit() {
            debug!(
                seen = approximate,
                limit = config.approximate_limit(),
                "dropped approximate readings over the limit"
            );
        }

        if readings.is_empty() {
            return Err(ModelError::NoUsableMeasurements);
        }

        Ok(Self {
            bounds: floorplan.bounds(),
            readings,
            config,
            probes: ProbeTrace::new(),
        })
    }

    /// Returns the readings the cost uses, as `(anchor, distance)`.
    pub fn readings(&self) -> impl Iterator<Item = (&'a Anchor, f64)> + '_ {
        self.readings.iter().map(|r| (r.anchor, r.distance))
    }

    #[must_use]
    pub fn config(&self) -> &CostConfig {
        &self.config
    }

    /// Returns every position evaluated so far with its cost.
    #[must_use]
    pub fn probes(&self) -> &ProbeTrace<3> {
        &self.probes
    }

    /// Consumes the model, keeping only its probe trace.
    #[must_use]
    pub fn into_probes(self) -> ProbeTrace<3> {
        self.probes
    }

    /// Computes the cost of a candidate position and records the probe.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` has a `NaN` coordinate.
    pub fn evaluate(&mut self, x: &Point<3>) -> Result<f64, CostError> {
        if x.has_nan() {
            return Err(CostError::NanCandidate(x.into_coords()));
        }

        let cost = if self.bounds.contains(x) {
            self.residual_cost(x)
        } else {
            f64::INFINITY
        };

        self.probes.record(x, cost);
        Ok(cost)
    }

    fn residual_cost(&self, x: &Point<3>) -> f64 {
        let mut exact = SquaredResiduals::default();
        let mut approximate = SquaredResiduals::default();

        for reading in &self.readings {
            let predicted = reading.anchor.location.distance(x);
            let residual = (predicted - reading.distance).min(self.config.residual_cap());
            match reading.anchor.quality {
                Quality::Exact => exact.push(residual),
                Quality::Approximate => approximate.push(residual),
            }
        }

        if exact.count > self.config.exact_quorum() {
            exact.mean()
        } else {
            exact.mean() * self.config.exact_weight() + approximate.mean()
        }
    }
}

impl Objective<3> for LocationModel<'_> {
    type Error = CostError;

    fn bounds(&self) -> Bounds<3> {
        self.bounds
    }

    fn cost(&mut self, x: &Point<3>) -> Result<f64, Self::Error> {
        self.evaluate(x)
    }
}

/// Running sum of squared residuals for one anchor quality.
#[derive(Debug, Default)]
struct SquaredResiduals {
    sum: f64,
    count: usize,
}

impl SquaredResiduals {
    fn push(&mut self, residual: f64) {
        self.sum += residual * residual;
        self.count += 1;
    }

    /// Mean of the squares; `0` when empty.
    fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.count as f64;
        self.sum / count
    }
}
