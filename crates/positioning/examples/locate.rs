//! Estimates a position on a small apartment floor.
//!
//! Run with `RUST_LOG=wayfind_solvers=trace` to watch the solver work:
//!
//! ```text
//! cargo run -p wayfind-positioning --example locate --features serde
//! ```

use tracing_subscriber::{EnvFilter, fmt};
use wayfind_positioning::{Floorplan, LocateConfig, MeasurementSet, locate};

const FLOORPLAN: &str = r#"{
    "bounds": { "min": [0, 0, 0], "max": [12, 8, 2.8] },
    "anchors": [
        { "id": "front-door", "location": [0, 4, 2.1], "quality": "exact" },
        { "id": "kitchen", "location": [12, 0, 2.5], "quality": "exact" },
        { "id": "bedroom", "location": [12, 8, 2.5], "quality": "exact" },
        { "id": "speaker", "location": [6, 8, 0.4], "quality": "approximate" },
        { "id": "tv", "location": [3, 0, 1.0], "quality": "approximate" }
    ]
}"#;

const CONFIG: &str = r#"{ "max_iters": 500 }"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let floorplan: Floorplan = serde_json::from_str(FLOORPLAN)?;
    let config: LocateConfig = serde_json::from_str(CONFIG)?;

    let measurements = MeasurementSet::from_readings([
        ("front-door", 6.62),
        ("kitchen", 6.93),
        ("bedroom", 5.24),
        ("speaker", 3.9),
        ("tv", 3.7),
    ])?;

    let estimate = locate(&floorplan, &measurements, &config)?;

    match estimate.position {
        Some(p) => println!(
            "position ({:.2}, {:.2}, {:.2}) cost {:.4} after {} iterations ({:?})",
            p[0],
            p[1],
            p[2],
            estimate.cost.unwrap_or(f64::NAN),
            estimate.iters,
            estimate.status,
        ),
        None => println!("no feasible position ({:?})", estimate.status),
    }
    println!("{} distinct positions probed", estimate.probes.len());

    Ok(())
}
