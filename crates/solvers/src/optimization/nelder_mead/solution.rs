use wayfind_core::Point;

use super::Vertex;

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The cost spread fell within tolerance or the simplex collapsed.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,

    /// Every evaluated vertex was infeasible.
    Infeasible,
}

/// The result of a Nelder–Mead search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Lowest-cost vertex at termination, or `None` if [`Status::Infeasible`].
    pub best: Option<Vertex<N>>,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Number of objective evaluations.
    pub evals: usize,
}

impl<const N: usize> Solution<N> {
    /// Returns the best point found, if any point was feasible.
    #[must_use]
    pub fn best_solution(&self) -> Option<Point<N>> {
        self.best.map(|v| v.x)
    }

    /// Returns the cost at [`Solution::best_solution`].
    #[must_use]
    pub fn best_value(&self) -> Option<f64> {
        self.best.map(|v| v.cost)
    }
}
