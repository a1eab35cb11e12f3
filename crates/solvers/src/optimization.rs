//! Solvers for optimization problems — minimizing a scalar objective.
//!
//! # Solvers
//!
//! - [`nelder_mead`] — bounded simplex search for non-smooth objectives that
//!   may report infeasible points as `+∞`

pub mod nelder_mead;
