//! Core abstractions shared by the Wayfind solvers and positioning models.
//!
//! - [`Point`] — a fixed-dimension real vector with elementwise arithmetic
//! - [`Bounds`] — an axis-aligned box of points
//! - [`Objective`] — the narrow "bounds + cost" capability a minimizer needs
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`ProbeTrace`] — a diagnostic record of every point an objective evaluated
//!
//! The dimension is a const generic `N` throughout, so points, bounds, and
//! objectives of different dimensions cannot be mixed.

mod bounds;
mod objective;
mod observer;
mod point;
mod probe;

pub use bounds::{Bounds, BoundsError};
pub use objective::Objective;
pub use observer::Observer;
pub use point::Point;
pub use probe::{ProbeTrace, ResolutionError};
