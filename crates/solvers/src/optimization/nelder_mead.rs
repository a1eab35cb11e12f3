//! Nelder–Mead simplex search for bounded multi-variable minimization.
//!
//! # Algorithm
//!
//! The solver keeps `N + 1` vertices, each with its cached cost. Every
//! iteration sorts the vertices by cost (stable, so equal costs keep their
//! prior order), then tries to replace the worst vertex:
//!
//! 1. **Reflect** the worst vertex through the centroid of the others.
//! 2. If the reflection beats the best vertex, also try an **expansion**
//!    twice as far out and keep whichever of the two is lower.
//! 3. Otherwise keep the reflection if it beats the second-worst vertex.
//! 4. Otherwise **contract** halfway from the centroid toward the worst
//!    vertex and keep it if it beats the worst.
//! 5. Otherwise **shrink** every vertex halfway toward the best one.
//!
//! Every new point is evaluated exactly once.
//!
//! # Initial simplex
//!
//! The first vertex is the midpoint of [`Objective::bounds`]. Vertex `i + 1`
//! moves coordinate `i` of the midpoint toward the upper bound by
//! [`Config::initial_step`] of the remaining distance. Construction is
//! deterministic, so repeated runs on the same objective are identical.
//!
//! # Termination
//!
//! - [`Status::Converged`] — the spread between best and worst cost is within
//!   tolerance, or the simplex has collapsed to a point
//! - [`Status::MaxIters`] — the iteration budget ran out
//! - [`Status::StoppedByObserver`] — an observer returned [`Action::StopEarly`]
//! - [`Status::Infeasible`] — every vertex still costs `+∞`; no best point is
//!   reported
//!
//! With `max_iters == 0` only the midpoint is evaluated and returned.
//!
//! # Infeasible points
//!
//! Objectives mark infeasible points with `f64::INFINITY`. These sort last
//! and are replaced like any other bad vertex, which makes a hard box
//! constraint usable without any special handling. A `NaN` cost is an error.
//!
//! # Observer Events
//!
//! - [`Event::Initialized`] — once, after the initial simplex is evaluated
//! - [`Event::Iterated`] — after every step, with the [`Step`] taken

mod action;
mod config;
mod error;
mod event;
mod search;
mod simplex;
mod solution;
mod step;
mod vertex;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};
pub use step::Step;
pub use vertex::Vertex;

use wayfind_core::{Objective, Observer};

use search::search;

/// Finds the minimum of the objective using Nelder–Mead.
///
/// The observer receives an [`Event`] after initialization and after every
/// iteration. See the [module docs](self) for the algorithm and statuses.
///
/// # Errors
///
/// Returns an error if `N == 0`, if the objective fails, or if it returns `NaN`.
pub fn minimize<O, Obs, const N: usize>(
    objective: &mut O,
    config: &Config,
    observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    search(objective, config, observer)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if `N == 0`, if the objective fails, or if it returns `NaN`.
pub fn minimize_unobserved<O, const N: usize>(
    objective: &mut O,
    config: &Config,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
{
    minimize(objective, config, ())
}
