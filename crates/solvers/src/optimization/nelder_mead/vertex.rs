use wayfind_core::Point;

/// A simplex vertex with its cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex<const N: usize> {
    /// The vertex location.
    pub x: Point<N>,

    /// The objective at `x`; `f64::INFINITY` if infeasible.
    pub cost: f64,
}

impl<const N: usize> Vertex<N> {
    /// Creates a new vertex.
    #[must_use]
    pub fn new(x: Point<N>, cost: f64) -> Self {
        Self { x, cost }
    }

    /// Returns `true` if the cost is not `+∞`.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.cost != f64::INFINITY
    }
}
