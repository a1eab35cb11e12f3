use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::Point;

/// Every point an objective evaluated, with its cost.
///
/// Points are keyed by the exact bit pattern of their coordinates, so two
/// probes only collide if they are bit-identical (`0.0` and `-0.0` are
/// distinct keys). This is fine for diagnostics and overlays. Anything that
/// persists or deduplicates probes should go through [`ProbeTrace::quantized`].
#[derive(Debug, Clone, Default)]
pub struct ProbeTrace<const N: usize> {
    probes: HashMap<[u64; N], f64>,
}

/// The resolution passed to [`ProbeTrace::quantized`] was not usable.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("quantization resolution must be finite and positive, got {0}")]
pub struct ResolutionError(pub f64);

impl<const N: usize> ProbeTrace<N> {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self {
            probes: HashMap::new(),
        }
    }

    /// Records the cost of a probe, replacing any earlier record of the same point.
    pub fn record(&mut self, x: &Point<N>, cost: f64) {
        self.probes.insert(key(x), cost);
    }

    /// Returns the recorded cost of a bit-identical point, if any.
    #[must_use]
    pub fn get(&self, x: &Point<N>) -> Option<f64> {
        self.probes.get(&key(x)).copied()
    }

    /// Number of distinct points recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Forgets every recorded probe.
    pub fn clear(&mut self) {
        self.probes.clear();
    }

    /// Iterates over recorded probes in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Point<N>, f64)> + '_ {
        self.probes
            .iter()
            .map(|(bits, cost)| (Point::new(bits.map(f64::from_bits)), *cost))
    }

    /// Buckets probes onto a grid with the given cell size.
    ///
    /// Each cell is keyed by `round(x[i] / resolution)` and keeps the lowest
    /// cost recorded inside it. The result is ordered by cell.
    ///
    /// # Errors
    ///
    /// Returns an error if `resolution` is not finite and positive.
    pub fn quantized(&self, resolution: f64) -> Result<BTreeMap<[i64; N], f64>, ResolutionError> {
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(ResolutionError(resolution));
        }

        let mut cells = BTreeMap::new();
        for (x, cost) in self.iter() {
            #[allow(clippy::cast_possible_truncation)]
            let cell = x.into_coords().map(|c| (c / resolution).round() as i64);
            cells
                .entry(cell)
                .and_modify(|best: &mut f64| *best = best.min(cost))
                .or_insert(cost);
        }
        Ok(cells)
    }
}

fn key<const N: usize>(x: &Point<N>) -> [u64; N] {
    x.coords().map(f64::to_bits)
}
