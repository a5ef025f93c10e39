//! Directional well trajectory engine.
//!
//! Closed-form solvers for vertical, build-and-hold ("J") and
//! build-hold-drop ("S") wells, each producing named geometry plus a
//! labelled survey polyline. Front-ends (CLI, plotting) share this library.

pub mod engine;
pub mod scenario;

pub use well_config as config;
pub use well_core as common;
pub use well_export as export;
pub use well_jtype as jtype;
pub use well_stype as stype;
pub use well_vertical as vertical;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
