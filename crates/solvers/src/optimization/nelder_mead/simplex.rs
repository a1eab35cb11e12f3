use wayfind_core::{Bounds, Objective, Point};

use super::{Config, Error, Step, Vertex};

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// Evaluates points against an objective, counting calls.
pub(super) struct Evaluator<'o, O> {
    objective: &'o mut O,
    evals: usize,
}

impl<'o, O> Evaluator<'o, O> {
    pub(super) fn new(objective: &'o mut O) -> Self {
        Self {
            objective,
            evals: 0,
        }
    }

    pub(super) fn evals(&self) -> usize {
        self.evals
    }

    pub(super) fn eval<const N: usize>(&mut self, x: Point<N>) -> Result<Vertex<N>, Error>
    where
        O: Objective<N>,
    {
        self.evals += 1;
        let cost = self.objective.cost(&x).map_err(Error::objective)?;
        if cost.is_nan() {
            return Err(Error::NanCost {
                x: x.coords().to_vec(),
            });
        }
        Ok(Vertex::new(x, cost))
    }
}

/// The `N + 1` vertices of a Nelder–Mead search.
///
/// Most methods assume the vertices are sorted, so call [`Simplex::sort`]
/// before querying best/worst or stepping.
pub(super) struct Simplex<const N: usize> {
    vertices: Vec<Vertex<N>>,
}

impl<const N: usize> Simplex<N> {
    /// Builds and evaluates the initial simplex: the midpoint of `bounds`,
    /// then one vertex per axis moved toward the upper bound.
    pub(super) fn initial<O: Objective<N>>(
        bounds: &Bounds<N>,
        step: f64,
        evaluator: &mut Evaluator<'_, O>,
    ) -> Result<Self, Error> {
        let mid = bounds.midpoint();
        let max = bounds.max();

        let mut vertices = Vec::with_capacity(N + 1);
        vertices.push(evaluator.eval(mid)?);
        for axis in 0..N {
            let mut coords = mid.into_coords();
            coords[axis] += (max[axis] - mid[axis]) * step;
            vertices.push(evaluator.eval(Point::new(coords))?);
        }

        Ok(Self { vertices })
    }

    pub(super) fn vertices(&self) -> &[Vertex<N>] {
        &self.vertices
    }

    /// Sorts by ascending cost, keeping prior order among equal costs.
    pub(super) fn sort(&mut self) {
        self.vertices.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    }

    pub(super) fn best(&self) -> Vertex<N> {
        self.vertices[0]
    }

    pub(super) fn worst(&self) -> Vertex<N> {
        self.vertices[N]
    }

    /// Lowest cost in the simplex, sorted or not.
    pub(super) fn lowest_cost(&self) -> f64 {
        self.vertices
            .iter()
            .map(|v| v.cost)
            .fold(f64::INFINITY, f64::min)
    }

    /// The cost spread is within tolerance. Never true while the best vertex
    /// is infeasible.
    pub(super) fn is_converged(&self, config: &Config) -> bool {
        let best = self.best().cost;
        let worst = self.worst().cost;
        best.is_finite()
            && worst.is_finite()
            && worst - best <= config.f_abs_tol() + config.f_rel_tol() * best.abs()
    }

    /// Every vertex lies within `x_abs_tol` of the best on every axis.
    pub(super) fn is_collapsed(&self, config: &Config) -> bool {
        let best = self.best().x;
        self.vertices
            .iter()
            .all(|v| v.x.max_abs_diff(&best) <= config.x_abs_tol())
    }

    /// Performs one Nelder–Mead iteration on a sorted simplex.
    pub(super) fn step<O: Objective<N>>(
        &mut self,
        evaluator: &mut Evaluator<'_, O>,
    ) -> Result<Step, Error> {
        let best = self.best();
        let worst = self.worst();
        let second_worst = self.vertices[N - 1];
        let centroid = self.centroid();

        let reflected = evaluator.eval(centroid + (centroid - worst.x) * REFLECTION)?;

        if reflected.cost < best.cost {
            let expanded = evaluator.eval(centroid + (reflected.x - centroid) * EXPANSION)?;
            return Ok(if expanded.cost < reflected.cost {
                self.vertices[N] = expanded;
                Step::Expand
            } else {
                self.vertices[N] = reflected;
                Step::Reflect
            });
        }

        if reflected.cost < second_worst.cost {
            self.vertices[N] = reflected;
            return Ok(Step::Reflect);
        }

        let contracted = evaluator.eval(centroid + (worst.x - centroid) * CONTRACTION)?;
        if contracted.cost < worst.cost {
            self.vertices[N] = contracted;
            return Ok(Step::Contract);
        }

        for vertex in &mut self.vertices[1..] {
            *vertex = evaluator.eval(best.x + (vertex.x - best.x) * SHRINK)?;
        }
        Ok(Step::Shrink)
    }

    /// Centroid of every vertex except the worst.
    fn centroid(&self) -> Point<N> {
        #[allow(clippy::cast_precision_loss)]
        let scale = 1.0 / N as f64;
        Point::sum(self.vertices[..N].iter().map(|v| &v.x)) * scale
    }

    pub(super) fn into_best(mut self) -> Vertex<N> {
        self.sort();
        self.vertices[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    /// Cost is the first coordinate.
    struct FirstAxis(Bounds<2>);

    impl Objective<2> for FirstAxis {
        type Error = Infallible;

        fn bounds(&self) -> Bounds<2> {
            self.0
        }

        fn cost(&mut self, x: &Point<2>) -> Result<f64, Self::Error> {
            Ok(x[0])
        }
    }

    fn square() -> Bounds<2> {
        Bounds::new(Point::new([0.0, 0.0]), Point::new([8.0, 4.0])).unwrap()
    }

    #[test]
    fn initial_simplex_perturbs_one_axis_toward_max() {
        let mut objective = FirstAxis(square());
        let mut evaluator = Evaluator::new(&mut objective);

        let simplex = Simplex::initial(&square(), 0.5, &mut evaluator).unwrap();
        let xs: Vec<_> = simplex.vertices().iter().map(|v| v.x).collect();

        assert_eq!(
            xs,
            vec![
                Point::new([4.0, 2.0]),
                Point::new([6.0, 2.0]),
                Point::new([4.0, 3.0]),
            ]
        );
        assert_eq!(evaluator.evals(), 3);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut objective = FirstAxis(square());
        let mut evaluator = Evaluator::new(&mut objective);
        let mut simplex = Simplex::initial(&square(), 0.5, &mut evaluator).unwrap();

        // Midpoint and the second-axis vertex share cost 4.0.
        simplex.sort();

        assert_eq!(simplex.best().x, Point::new([4.0, 2.0]));
        assert_eq!(simplex.vertices()[1].x, Point::new([4.0, 3.0]));
        assert_eq!(simplex.worst().x, Point::new([6.0, 2.0]));
    }

    #[test]
    fn step_on_linear_cost_expands() {
        let mut objective = FirstAxis(square());
        let mut evaluator = Evaluator::new(&mut objective);
        let mut simplex = Simplex::initial(&square(), 0.5, &mut evaluator).unwrap();
        simplex.sort();

        let step = simplex.step(&mut evaluator).unwrap();

        // Centroid (4, 2.5); reflection (2, 3) beats best, expansion (0, 3.5) beats that.
        assert_eq!(step, Step::Expand);
        assert_relative_eq!(simplex.vertices()[2].x[0], 0.0);
        assert_relative_eq!(simplex.vertices()[2].x[1], 3.5);
        assert_eq!(evaluator.evals(), 5);
    }

    #[test]
    fn collapsed_when_all_vertices_coincide() {
        let v = Vertex::new(Point::new([1.0, 1.0]), 0.0);
        let simplex = Simplex {
            vertices: vec![v, v, v],
        };
        assert!(simplex.is_collapsed(&Config::default()));
    }

    #[test]
    fn not_converged_while_best_is_infeasible() {
        let v = Vertex::new(Point::new([1.0, 1.0]), f64::INFINITY);
        let simplex = Simplex {
            vertices: vec![v, v, v],
        };
        assert!(!simplex.is_converged(&Config::default()));
    }
}
