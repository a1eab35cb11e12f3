use crate::{Bounds, Point};

/// A scalar objective over an `N`-dimensional box.
///
/// This is the only capability a minimizer needs: where to start looking and
/// how much a candidate point costs. Costs are compared as plain `f64`, with
/// `f64::INFINITY` marking an infeasible point. A cost of `NaN` is never a
/// valid answer and solvers treat it as an error.
///
/// `cost` takes `&mut self` so implementations may record what they
/// evaluated (see [`ProbeTrace`](crate::ProbeTrace)).
pub trait Objective<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the box the initial search structure is built in.
    fn bounds(&self) -> Bounds<N>;

    /// Computes the cost of a candidate point.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the cost cannot be computed at `x`.
    fn cost(&mut self, x: &Point<N>) -> Result<f64, Self::Error>;
}
