//! Named scalar results shared by the profile solvers.

use std::fmt;

use serde::Serialize;

use crate::constants::DISPLAY_DECIMALS;
use crate::units::round_to;

/// Unit attached to a reported quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Feet,
    Degrees,
}

impl Unit {
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Feet => "ft",
            Unit::Degrees => "deg",
        }
    }
}

/// One named result of a solve, kept at full precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Unit,
    pub value: f64,
}

impl Quantity {
    pub fn feet(key: &'static str, label: &'static str, value: f64) -> Self {
        Self {
            key,
            label,
            unit: Unit::Feet,
            value,
        }
    }

    pub fn degrees(key: &'static str, label: &'static str, value: f64) -> Self {
        Self {
            key,
            label,
            unit: Unit::Degrees,
            value,
        }
    }

    /// Value rounded to two decimals for tables and reports.
    pub fn display_value(&self) -> f64 {
        round_to(self.value, DISPLAY_DECIMALS)
    }
}

/// Non-fatal conditions met while solving. The solve still returns a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeometryWarning {
    /// An inverse-cosine argument fell outside `[-1, 1]` and was clamped.
    ClampedCosine { stage: &'static str, ratio: f64 },
    /// The kick-off point sits deeper than the largest consistent KOP.
    KopAboveMaximum { kop_ft: f64, max_kop_ft: f64 },
    /// The S-profile tangent reaches or passes horizontal, so the tangent
    /// and drop depths past the build arc are not physical.
    InclinationBeyondHorizontal { theta_deg: f64 },
}

impl fmt::Display for GeometryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryWarning::ClampedCosine { stage, ratio } => write!(
                f,
                "{stage}: cosine argument {ratio:.6} is outside [-1, 1] and was clamped; results sit on a geometric boundary, consider increasing the build rate or adjusting the target"
            ),
            GeometryWarning::KopAboveMaximum { kop_ft, max_kop_ft } => write!(
                f,
                "kick-off point {kop_ft:.2} ft is deeper than the suggested maximum of {max_kop_ft:.2} ft; consider a shallower KOP"
            ),
            GeometryWarning::InclinationBeyondHorizontal { theta_deg } => write!(
                f,
                "tangent inclination {theta_deg:.2} deg is at or beyond horizontal, so MD3, x3 and the drop section are not physical; lower BUR/DOR or deepen D4 below KOP"
            ),
        }
    }
}

/// Common view over a solved geometry.
pub trait Geometry {
    /// Short profile name used in reports.
    fn profile(&self) -> &'static str;

    /// Ordered named results at full precision.
    fn quantities(&self) -> Vec<Quantity>;

    fn warnings(&self) -> &[GeometryWarning];

    /// Look up a quantity by key.
    fn quantity(&self, key: &str) -> Option<Quantity> {
        self.quantities().into_iter().find(|q| q.key == key)
    }
}
