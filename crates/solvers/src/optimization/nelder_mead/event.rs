use super::{Step, Vertex};

/// Events emitted by the Nelder–Mead solver.
///
/// Each event borrows the current simplex. After [`Event::Iterated`] the
/// simplex is not sorted; use [`Event::best`] to find the lowest vertex.
#[derive(Debug, Clone, Copy)]
pub enum Event<'a, const N: usize> {
    /// The initial simplex has been built and evaluated.
    Initialized {
        /// The `N + 1` initial vertices, midpoint first.
        simplex: &'a [Vertex<N>],

        /// Objective evaluations so far.
        evals: usize,
    },

    /// An iteration finished.
    Iterated {
        /// The iteration number, starting at 1.
        iter: usize,

        /// The move the iteration made.
        step: Step,

        /// The simplex after the move.
        simplex: &'a [Vertex<N>],

        /// Objective evaluations so far.
        evals: usize,
    },
}

impl<const N: usize> Event<'_, N> {
    /// Returns the iteration number, or `0` for [`Event::Initialized`].
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Initialized { .. } => 0,
            Self::Iterated { iter, .. } => *iter,
        }
    }

    /// Returns the current simplex.
    #[must_use]
    pub fn simplex(&self) -> &[Vertex<N>] {
        match self {
            Self::Initialized { simplex, .. } | Self::Iterated { simplex, .. } => simplex,
        }
    }

    /// Returns the number of objective evaluations so far.
    #[must_use]
    pub fn evals(&self) -> usize {
        match self {
            Self::Initialized { evals, .. } | Self::Iterated { evals, .. } => *evals,
        }
    }

    /// Returns the lowest-cost vertex, preferring the earliest on ties.
    #[must_use]
    pub fn best(&self) -> Option<&Vertex<N>> {
        self.simplex()
            .iter()
            .reduce(|best, v| if v.cost < best.cost { v } else { best })
    }
}
