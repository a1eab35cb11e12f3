use thiserror::Error;
use tracing::{info, warn};
use wayfind_core::{Observer, Point, ProbeTrace};
use wayfind_solvers::optimization::nelder_mead::{self, Action, Event, Status};

use crate::{CostConfig, Floorplan, LocateConfig, LocationModel, MeasurementSet, ModelError};

/// A position estimate for one batch of readings.
#[derive(Debug, Clone)]
pub struct Estimate {
    /// Most likely position, or `None` if no feasible position was found.
    pub position: Option<Point<3>>,

    /// Cost at `position`.
    pub cost: Option<f64>,

    /// Why the solver stopped.
    pub status: Status,

    /// Solver iterations used.
    pub iters: usize,

    /// Every position the solver evaluated, with its cost.
    pub probes: ProbeTrace<3>,
}

/// Errors that can occur while estimating a position.
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("invalid positioning input: {0}")]
    Model(#[from] ModelError),

    #[error("solver failed: {0}")]
    Solver(#[from] nelder_mead::Error),
}

/// Estimates the receiver position from one batch of readings.
///
/// Runs a fresh Nelder–Mead search over the floor's bounding box; nothing is
/// carried over between calls.
///
/// # Errors
///
/// Returns an error if the readings can't form a cost model (see
/// [`LocationModel::new`]) or if the solver fails.
pub fn locate(
    floorplan: &Floorplan,
    measurements: &MeasurementSet,
    config: &LocateConfig,
) -> Result<Estimate, LocateError> {
    locate_with(floorplan, measurements, config.cost, &config.solver(), ())
}

/// Estimates the receiver position with full control over the solver.
///
/// The observer sees every Nelder–Mead event and may stop the search early.
///
/// # Errors
///
/// Returns an error if the readings can't form a cost model (see
/// [`LocationModel::new`]) or if the solver fails.
pub fn locate_with<Obs>(
    floorplan: &Floorplan,
    measurements: &MeasurementSet,
    cost: CostConfig,
    solver: &nelder_mead::Config,
    observer: Obs,
) -> Result<Estimate, LocateError>
where
    Obs: for<'a> Observer<Event<'a, 3>, Action>,
{
    let mut model = LocationModel::new(floorplan, measurements, cost)?;
    let solution = nelder_mead::minimize(&mut model, solver, observer)?;

    match solution.best {
        Some(best) => info!(
            x = best.x[0],
            y = best.x[1],
            z = best.x[2],
            cost = best.cost,
            iters = solution.iters,
            evals = solution.evals,
            "position estimated"
        ),
        None => warn!(
            readings = measurements.len(),
            evals = solution.evals,
            "no feasible position"
        ),
    }

    Ok(Estimate {
        position: solution.best_solution(),
        cost: solution.best_value(),
        status: solution.status,
        iters: solution.iters,
        probes: model.into_probes(),
    })
}
