//! Closed-form solver for the S-profile.
//!
//! Checkpoint depths: KOP (start of build), D2 (end of build), D3 (end of
//! tangent), D4 (end of drop), TVD. The tangent inclination θ is solved from
//! the combined reach `r1 + r2` of the two arcs against the target offset x4.

use std::f64::consts::PI;

use serde::Serialize;
use well_core::trig::clamped_acos;
use well_core::units::radius_of_curvature;
use well_core::{DomainError, Geometry, GeometryWarning, Quantity};

/// Inputs for an S-profile solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SParameters {
    /// Build-up rate (deg/100 ft).
    pub bur_deg_100ft: f64,
    /// Drop-off rate (deg/100 ft).
    pub dor_deg_100ft: f64,
    pub kop_ft: f64,
    /// Vertical depth at the end of the tangent section.
    pub d3_ft: f64,
    /// Vertical depth at the end of the drop section.
    pub d4_ft: f64,
    pub tvd_ft: f64,
    /// Horizontal displacement of the target.
    pub x4_ft: f64,
}

/// Which θ formula applies. The two are not interchangeable near
/// `r1 + r2 == x4`; equality takes `OffsetExceedsCurvature`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SBranch {
    /// `r1 + r2 > x4`: `θ = atan(ΔD / (r1 + r2 − x4)) − acos(...)`.
    CurvatureExceedsOffset,
    /// `r1 + r2 ≤ x4`: `θ = π − atan(ΔD / (x4 − (r1 + r2))) − acos(...)`.
    OffsetExceedsCurvature,
}

/// Solved S-profile geometry at full precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SGeometry {
    pub params: SParameters,
    pub branch: SBranch,
    pub r1_ft: f64,
    pub r2_ft: f64,
    pub theta_rad: f64,
    pub theta_deg: f64,
    /// Vertical depth at end of build.
    pub d2_ft: f64,
    /// Horizontal displacement at end of build.
    pub x2_ft: f64,
    /// Measured length of the build arc.
    pub build_length_ft: f64,
    pub md2_ft: f64,
    /// Measured depth at D3 (end of tangent).
    pub md3_ft: f64,
    /// Horizontal displacement at end of tangent.
    pub x3_ft: f64,
    /// Measured length of the drop arc.
    pub drop_length_ft: f64,
    /// Horizontal displacement where the drop arc returns to vertical.
    pub drop_end_x_ft: f64,
    /// Vertical depth where the drop arc returns to vertical.
    pub drop_end_depth_ft: f64,
    pub md_drop_end_ft: f64,
    pub md_total_ft: f64,
    pub warnings: Vec<GeometryWarning>,
}

fn validate(params: &SParameters) -> Result<(), DomainError> {
    let SParameters {
        d3_ft, d4_ft, tvd_ft, ..
    } = *params;
    if !(d3_ft < d4_ft && d4_ft < tvd_ft) {
        return Err(DomainError::InvalidCheckpointOrdering {
            d3_ft,
            d4_ft,
            tvd_ft,
        });
    }
    DomainError::require_positive("BUR", params.bur_deg_100ft)?;
    DomainError::require_positive("DOR", params.dor_deg_100ft)?;
    DomainError::require_non_negative("KOP", params.kop_ft)?;
    DomainError::require_positive("x4", params.x4_ft)?;
    if params.kop_ft >= d3_ft {
        return Err(DomainError::InvalidDepthOrdering {
            kop_ft: params.kop_ft,
            depth_ft: d3_ft,
        });
    }
    Ok(())
}

/// Solve the S-profile. Checkpoint ordering is verified before any
/// trigonometry runs.
pub fn solve(params: &SParameters) -> Result<SGeometry, DomainError> {
    validate(params)?;

    let SParameters {
        bur_deg_100ft: bur,
        dor_deg_100ft: dor,
        kop_ft: kop,
        d3_ft: d3,
        d4_ft: d4,
        tvd_ft: tvd,
        x4_ft: x4,
    } = *params;

    let r1 = radius_of_curvature(bur);
    let r2 = radius_of_curvature(dor);
    let reach = r1 + r2;
    let run = d4 - kop;

    let branch = if reach > x4 {
        SBranch::CurvatureExceedsOffset
    } else {
        SBranch::OffsetExceedsCurvature
    };
    let term1 = match branch {
        SBranch::CurvatureExceedsOffset => (run / (reach - x4)).atan(),
        // `x4 == reach` gives +inf here, and atan(+inf) = π/2.
        SBranch::OffsetExceedsCurvature => (run / (x4 - reach)).atan(),
    };

    let mut warnings = Vec::new();
    let term2 = clamped_acos(reach / run * term1.sin());
    if term2.clamped {
        log::warn!(
            "S-profile: cosine argument {:.10} clamped into [-1, 1]",
            term2.ratio
        );
        warnings.push(GeometryWarning::ClampedCosine {
            stage: "theta ((r1 + r2) / (D4 - KOP) * sin)",
            ratio: term2.ratio,
        });
    }

    let theta = match branch {
        SBranch::CurvatureExceedsOffset => term1 - term2.angle_rad,
        SBranch::OffsetExceedsCurvature => PI - term1 - term2.angle_rad,
    };
    log::debug!(
        "S-profile: {branch:?}, r1 = {r1:.4} ft, r2 = {r2:.4} ft, theta = {:.6} deg",
        theta.to_degrees()
    );

    if theta.to_degrees() >= 90.0 {
        log::warn!(
            "S-profile: tangent inclination {:.4} deg reaches horizontal",
            theta.to_degrees()
        );
        warnings.push(GeometryWarning::InclinationBeyondHorizontal {
            theta_deg: theta.to_degrees(),
        });
    }

    let (sin_t, cos_t) = theta.sin_cos();
    let d2 = kop + r1 * sin_t;
    let x2 = r1 * (1.0 - cos_t);
    let build_length = theta * r1;
    let md2 = kop + build_length;
    let md3 = md2 + (d3 - d2) / cos_t;
    let x3 = x2 + (d3 - d2) * theta.tan();

    let drop_length = theta * r2;
    let drop_end_x = x3 + r2 * (1.0 - cos_t);
    let drop_end_depth = d3 + r2 * sin_t;
    let md_drop_end = md3 + drop_length;
    let md_total = md_drop_end + (tvd - d4);

    Ok(SGeometry {
        params: *params,
        branch,
        r1_ft: r1,
        r2_ft: r2,
        theta_rad: theta,
        theta_deg: theta.to_degrees(),
        d2_ft: d2,
        x2_ft: x2,
        build_length_ft: build_length,
        md2_ft: md2,
        md3_ft: md3,
        x3_ft: x3,
        drop_length_ft: drop_length,
        drop_end_x_ft: drop_end_x,
        drop_end_depth_ft: drop_end_depth,
        md_drop_end_ft: md_drop_end,
        md_total_ft: md_total,
        warnings,
    })
}

impl Geometry for SGeometry {
    fn profile(&self) -> &'static str {
        "S"
    }

    fn quantities(&self) -> Vec<Quantity> {
        vec![
            Quantity::feet("r1", "Build radius (r1)", self.r1_ft),
            Quantity::feet("r2", "Drop radius (r2)", self.r2_ft),
            Quantity::degrees("theta", "Tangent inclination (theta)", self.theta_deg),
            Quantity::feet("d2", "End of build depth (D2)", self.d2_ft),
            Quantity::feet("x2", "End of build displacement (x2)", self.x2_ft),
            Quantity::feet("build_length", "Build section length (L1)", self.build_length_ft),
            Quantity::feet("md2", "MD at end of build", self.md2_ft),
            Quantity::feet("md3", "MD at D3", self.md3_ft),
            Quantity::feet("x3", "End of tangent displacement (x3)", self.x3_ft),
            Quantity::feet("drop_length", "Drop section length", self.drop_length_ft),
            Quantity::feet("drop_end_x", "End of drop displacement", self.drop_end_x_ft),
            Quantity::feet("drop_end_depth", "End of drop depth", self.drop_end_depth_ft),
            Quantity::feet("md_drop_end", "MD at end of drop", self.md_drop_end_ft),
            Quantity::feet("md_total", "Total measured depth", self.md_total_ft),
        ]
    }

    fn warnings(&self) -> &[GeometryWarning] {
        &self.warnings
    }
}
