//! Core units, constants, and shared primitives for the well trajectory workspace.
//!
//! All lengths are feet, all rates are degrees per 100 ft of measured depth,
//! and depths follow the negative-down convention once they land in a survey.

pub mod discretization;
pub mod error;
pub mod geometry;
pub mod survey;

pub use discretization::{Discretization, MAX_SECTION_STATIONS, require_station_budget};
pub use error::DomainError;
pub use geometry::{Geometry, GeometryWarning, Quantity, Unit};
pub use survey::{SectionLabel, Survey, SurveyPoint};

/// Drilling constants shared by the solvers.
pub mod constants {
    /// Course length that build/drop rates are quoted against (ft).
    pub const RATE_COURSE_FT: f64 = 100.0;
    /// Decimal places used when presenting results.
    pub const DISPLAY_DECIMALS: i32 = 2;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::RATE_COURSE_FT;

    /// Radius of curvature (ft) for a constant build or drop rate (deg/100 ft).
    ///
    /// `r = 100 · 180 / (π · rate)`: the arc length per degree of the rate,
    /// expressed as a circle radius.
    #[inline]
    pub fn radius_of_curvature(rate_deg_100ft: f64) -> f64 {
        RATE_COURSE_FT * 180.0 / (std::f64::consts::PI * rate_deg_100ft)
    }

    /// Measured length (ft) of an arc swept through `angle_deg` at `rate_deg_100ft`.
    #[inline]
    pub fn arc_length(angle_deg: f64, rate_deg_100ft: f64) -> f64 {
        angle_deg * RATE_COURSE_FT / rate_deg_100ft
    }

    /// Survey `z` for a positive depth below surface (negative-down, no `-0.0`).
    #[inline]
    pub fn z_from_depth(depth_ft: f64) -> f64 {
        if depth_ft == 0.0 { 0.0 } else { -depth_ft }
    }

    /// Round for display. Never feed the result back into a formula.
    #[inline]
    pub fn round_to(value: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    }
}

/// Inverse trigonometry guarded against arguments drifting out of domain.
pub mod trig {
    /// Result of a clamped inverse cosine.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct ClampedAcos {
        /// Angle in radians.
        pub angle_rad: f64,
        /// The argument as passed in, before clamping.
        pub ratio: f64,
        /// `true` when the argument was outside `[-1, 1]`.
        pub clamped: bool,
    }

    /// `acos` with the argument clamped into `[-1, 1]` first.
    pub fn clamped_acos(ratio: f64) -> ClampedAcos {
        let bounded = ratio.clamp(-1.0, 1.0);
        ClampedAcos {
            angle_rad: bounded.acos(),
            ratio,
            clamped: bounded != ratio,
        }
    }
}

/// Sampling helpers used by every discretizer.
pub mod sampling {
    /// `count` evenly spaced values from `start` to `end`, both ends included.
    pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (end - start) / (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        if i == count - 1 {
                            end
                        } else {
                            start + step * i as f64
                        }
                    })
                    .collect()
            }
        }
    }

    /// Half-open walk `start, start + step, ...` strictly below `end`.
    ///
    /// Values are computed as `start + k·step` rather than accumulated.
    pub fn stepped(start: f64, end: f64, step: f64) -> Vec<f64> {
        if step <= 0.0 || end <= start {
            return Vec::new();
        }
        let count = ((end - start) / step).ceil() as usize;
        (0..count)
            .map(|k| start + step * k as f64)
            .filter(|v| *v < end)
            .collect()
    }
}
