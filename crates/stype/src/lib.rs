//! Build-hold-drop ("S") trajectories: build arc, tangent, drop arc back to
//! vertical, then a final vertical run to total depth.

pub mod solver;
pub mod survey;

pub use solver::{SBranch, SGeometry, SParameters, solve};
pub use survey::discretize;
