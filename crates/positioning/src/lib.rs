//! Box-constrained multilateration for indoor positioning.
//!
//! Given distance readings from fixed anchors at known locations, this crate
//! builds a cost surface over a floor's bounding box and minimizes it with
//! the Nelder–Mead solver from `wayfind-solvers`.
//!
//! # Flow
//!
//! 1. Describe the floor with a [`Floorplan`]: its bounds and its [`Anchor`]s.
//! 2. Collect one batch of readings into a [`MeasurementSet`].
//! 3. Call [`locate`], or build a [`LocationModel`] and drive a solver yourself.
//!
//! Each call is independent and owns all of its mutable state, so separate
//! estimates may run on separate threads. A single [`LocationModel`] is not
//! meant to be shared.
//!
//! # Features
//!
//! - `serde` — derives `Serialize`/`Deserialize` for floorplans, anchors, and
//!   configuration so they can be loaded from asset files.

mod anchor;
mod config;
mod floorplan;
mod locate;
mod measurement;
mod model;

pub use anchor::{Anchor, Quality};
pub use config::{CostConfig, CostConfigError, LocateConfig};
pub use floorplan::{Floorplan, FloorplanError};
pub use locate::{Estimate, LocateError, locate, locate_with};
pub use measurement::{MeasurementError, MeasurementSet};
pub use model::{CostError, LocationModel, ModelError};
