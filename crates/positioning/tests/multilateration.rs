use approx::{assert_abs_diff_eq, assert_relative_eq};

use wayfind_core::{Bounds, Objective, Point};
use wayfind_positioning::{
    Anchor, CostConfig, Floorplan, LocateConfig, LocateError, LocationModel, MeasurementSet,
    ModelError, locate, locate_with,
};
use wayfind_solvers::optimization::nelder_mead::{self, Action, Event, Status};

/// Readings with zero noise from every anchor to `target`.
fn perfect_readings(floorplan: &Floorplan, target: Point<3>) -> MeasurementSet {
    MeasurementSet::from_readings(
        floorplan
            .anchors()
            .iter()
            .map(|a| (a.id.clone(), a.location.distance(&target))),
    )
    .unwrap()
}

/// A flat 10 × 10 floor with an exact anchor in every corner.
fn flat_square() -> Floorplan {
    let bounds = Bounds::new(Point::splat(0.0), Point::new([10.0, 10.0, 0.0])).unwrap();
    Floorplan::new(
        bounds,
        vec![
            Anchor::exact("sw", [0.0, 0.0, 0.0]),
            Anchor::exact("se", [10.0, 0.0, 0.0]),
            Anchor::exact("nw", [0.0, 10.0, 0.0]),
            Anchor::exact("ne", [10.0, 10.0, 0.0]),
        ],
    )
    .unwrap()
}

/// A 10 × 10 × 3 room with anchors mounted at different heights.
fn room() -> Floorplan {
    let bounds = Bounds::new(Point::splat(0.0), Point::new([10.0, 10.0, 3.0])).unwrap();
    Floorplan::new(
        bounds,
        vec![
            Anchor::exact("sw", [0.0, 0.0, 0.0]),
            Anchor::exact("se", [10.0, 0.0, 3.0]),
            Anchor::exact("nw", [0.0, 10.0, 3.0]),
            Anchor::exact("ne", [10.0, 10.0, 0.0]),
            Anchor::approximate("lamp", [5.0, 5.0, 3.0]),
            Anchor::approximate("tv", [10.0, 5.0, 1.0]),
        ],
    )
    .unwrap()
}

#[test]
fn finds_center_of_flat_square() {
    let floorplan = flat_square();
    let target = Point::new([5.0, 5.0, 0.0]);
    let measurements = perfect_readings(&floorplan, target);

    let estimate = locate(&floorplan, &measurements, &LocateConfig::default()).unwrap();

    let position = estimate.position.expect("feasible");
    assert!(position.distance(&target) < 0.1);
    assert_abs_diff_eq!(estimate.cost.unwrap(), 0.0, epsilon = 1e-9);
    assert_eq!(estimate.status, Status::Converged);
}

#[test]
fn finds_off_center_target_in_room() {
    let floorplan = room();
    let target = Point::new([3.0, 6.5, 1.2]);
    let measurements = perfect_readings(&floorplan, target);

    let estimate = locate(&floorplan, &measurements, &LocateConfig::default()).unwrap();

    let position = estimate.position.expect("feasible");
    assert_abs_diff_eq!(position[0], 3.0, epsilon = 0.01);
    assert_abs_diff_eq!(position[1], 6.5, epsilon = 0.01);
    assert_abs_diff_eq!(position[2], 1.2, epsilon = 0.01);
    assert!(estimate.iters < 1000);
}

#[test]
fn repeated_estimates_are_identical() {
    let floorplan = room();
    let measurements = perfect_readings(&floorplan, Point::new([7.0, 2.0, 0.5]));

    let first = locate(&floorplan, &measurements, &LocateConfig::default()).unwrap();
    let second = locate(&floorplan, &measurements, &LocateConfig::default()).unwrap();

    assert_eq!(first.position, second.position);
    assert_eq!(first.cost, second.cost);
    assert_eq!(first.iters, second.iters);
    assert_eq!(first.probes.len(), second.probes.len());
}

#[test]
fn probes_cover_the_estimate() {
    let floorplan = room();
    let measurements = perfect_readings(&floorplan, Point::new([1.0, 1.0, 1.0]));

    let estimate = locate(&floorplan, &measurements, &LocateConfig::default()).unwrap();

    let position = estimate.position.unwrap();
    assert_eq!(estimate.probes.get(&position), estimate.cost);
    assert!(estimate.probes.len() > 4);
}

#[test]
fn zero_iterations_reports_the_midpoint() {
    let floorplan = room();
    let measurements = perfect_readings(&floorplan, Point::new([1.0, 1.0, 1.0]));
    let config = LocateConfig {
        max_iters: 0,
        ..LocateConfig::default()
    };

    let estimate = locate(&floorplan, &measurements, &config).unwrap();

    assert_eq!(estimate.position, Some(Point::new([5.0, 5.0, 1.5])));
    assert_eq!(estimate.probes.len(), 1);
}

#[test]
fn best_cost_never_increases_while_locating() {
    let floorplan = room();
    let measurements = perfect_readings(&floorplan, Point::new([8.0, 3.0, 2.0]));

    let mut history = Vec::new();
    let observer = |event: &Event<'_, 3>| {
        history.push(event.best().map_or(f64::INFINITY, |v| v.cost));
        None::<Action>
    };

    locate_with(
        &floorplan,
        &measurements,
        CostConfig::default(),
        &nelder_mead::Config::default(),
        observer,
    )
    .unwrap();

    assert!(history.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn cost_is_non_negative_inside_and_infinite_outside() {
    let floorplan = room();
    let measurements =
        MeasurementSet::from_readings([("sw", 2.0), ("ne", 40.0), ("lamp", 0.5), ("tv", 3.0)])
            .unwrap();
    let mut model = LocationModel::new(&floorplan, &measurements, CostConfig::default()).unwrap();

    for i in 0..=10 {
        for j in 0..=10 {
            for k in 0..=3 {
                let inside = Point::new([f64::from(i), f64::from(j), f64::from(k)]);
                assert!(model.cost(&inside).unwrap() >= 0.0);
            }
        }
    }

    for outside in [
        Point::new([-0.01, 5.0, 1.0]),
        Point::new([5.0, 10.01, 1.0]),
        Point::new([5.0, 5.0, 3.5]),
    ] {
        assert_eq!(model.cost(&outside).unwrap(), f64::INFINITY);
    }
}

#[test]
fn exact_quorum_ignores_approximate_anchors() {
    let floorplan = room();
    let target = Point::new([4.0, 4.0, 1.0]);
    let mut measurements = perfect_readings(&floorplan, target);
    // Wildly wrong approximate readings must not matter with four exact anchors.
    measurements.insert("lamp", 50.0).unwrap();
    measurements.insert("tv", 0.0).unwrap();

    let mut model = LocationModel::new(&floorplan, &measurements, CostConfig::default()).unwrap();

    assert_abs_diff_eq!(model.cost(&target).unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn approximate_anchors_matter_without_quorum() {
    let floorplan = room();
    let target = Point::new([4.0, 4.0, 1.0]);
    let sw = Point::new([0.0, 0.0, 0.0]).distance(&target);
    let lamp = Point::new([5.0, 5.0, 3.0]).distance(&target);
    let measurements = MeasurementSet::from_readings([("sw", sw), ("lamp", lamp + 1.0)]).unwrap();

    let mut model = LocationModel::new(&floorplan, &measurements, CostConfig::default()).unwrap();

    // Exact residual 0, approximate residual −1.
    assert_relative_eq!(model.cost(&target).unwrap(), 1.0, epsilon = 1e-12);
}

#[test]
fn custom_tuning_changes_the_blend() {
    let floorplan = room();
    let target = Point::new([4.0, 4.0, 1.0]);
    let sw = Point::new([0.0, 0.0, 0.0]).distance(&target);
    let lamp = Point::new([5.0, 5.0, 3.0]).distance(&target);
    let measurements = MeasurementSet::from_readings([("sw", sw + 2.0), ("lamp", lamp)]).unwrap();

    let tuned = CostConfig::new(7.5, 3, 2, 1.0).unwrap();
    let mut model = LocationModel::new(&floorplan, &measurements, tuned).unwrap();

    // Exact residual −2 weighted 1×, approximate residual 0.
    assert_relative_eq!(model.cost(&target).unwrap(), 4.0, epsilon = 1e-12);
}

#[test]
fn unknown_anchor_fails_fast() {
    let floorplan = room();
    let measurements = MeasurementSet::from_readings([("sw", 1.0), ("garage", 4.0)]).unwrap();

    let err = locate(&floorplan, &measurements, &LocateConfig::default()).unwrap_err();

    assert!(matches!(
        err,
        LocateError::Model(ModelError::UnknownAnchor(ref id)) if id == "garage"
    ));
}

#[test]
fn empty_measurements_fail_fast() {
    let err = locate(&room(), &MeasurementSet::new(), &LocateConfig::default()).unwrap_err();

    assert!(matches!(err, LocateError::Model(ModelError::NoMeasurements)));
}
