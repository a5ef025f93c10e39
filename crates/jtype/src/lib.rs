//! Build-and-hold ("J") trajectories: one circular build arc followed by a
//! straight slant section to the target.

pub mod solver;
pub mod survey;

pub use solver::{JBranch, JGeometry, JParameters, max_kop, solve};
pub use survey::discretize;
