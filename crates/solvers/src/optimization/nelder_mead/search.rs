use tracing::{debug, trace};
use wayfind_core::{Objective, Observer};

use super::{
    Action, Config, Error, Event, Solution, Vertex,
    simplex::{Evaluator, Simplex},
    solution::Status,
};

/// Core Nelder–Mead search implementation.
pub(super) fn search<O, Obs, const N: usize>(
    objective: &mut O,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    O: Objective<N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    if N == 0 {
        return Err(Error::ZeroDimension);
    }

    let bounds = objective.bounds();
    let mut evaluator = Evaluator::new(objective);

    if config.max_iters() == 0 {
        let mid = evaluator.eval(bounds.midpoint())?;
        return Ok(finish(mid, Status::MaxIters, 0, evaluator.evals()));
    }

    let mut simplex = Simplex::initial(&bounds, config.initial_step(), &mut evaluator)?;

    let event = Event::Initialized {
        simplex: simplex.vertices(),
        evals: evaluator.evals(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        let best = simplex.into_best();
        return Ok(finish(best, Status::StoppedByObserver, 0, evaluator.evals()));
    }

    for iter in 1..=config.max_iters() {
        simplex.sort();

        if simplex.is_converged(config) || simplex.is_collapsed(config) {
            let best = simplex.into_best();
            return Ok(finish(best, Status::Converged, iter - 1, evaluator.evals()));
        }

        let step = simplex.step(&mut evaluator)?;
        trace!(
            iter,
            ?step,
            best = simplex.lowest_cost(),
            evals = evaluator.evals(),
            "nelder-mead step"
        );

        let event = Event::Iterated {
            iter,
            step,
            simplex: simplex.vertices(),
            evals: evaluator.evals(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            let best = simplex.into_best();
            return Ok(finish(best, Status::StoppedByObserver, iter, evaluator.evals()));
        }
    }

    let best = simplex.into_best();
    Ok(finish(best, Status::MaxIters, config.max_iters(), evaluator.evals()))
}

/// Builds the solution, reporting [`Status::Infeasible`] if the best vertex costs `+∞`.
fn finish<const N: usize>(best: Vertex<N>, status: Status, iters: usize, evals: usize) -> Solution<N> {
    let (status, best) = if best.is_feasible() {
        (status, Some(best))
    } else {
        (Status::Infeasible, None)
    };

    debug!(?status, iters, evals, best = ?best.map(|v| v.cost), "nelder-mead finished");

    Solution {
        status,
        best,
        iters,
        evals,
    }
}
