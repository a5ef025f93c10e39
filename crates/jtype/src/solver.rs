//! Closed-form solver for the J-profile.
//!
//! The build arc has radius `r = 18000 / (π·BUR)`, centred at `(r, KOP)` in
//! the vertical-section plane. The slant section leaves the arc tangentially
//! and reaches the target at `(H, TVD)`. Every dependent quantity is derived
//! from the full-precision angles; rounding only happens in `quantities()`
//! consumers.

use serde::Serialize;
use well_core::trig::clamped_acos;
use well_core::units::{arc_length, radius_of_curvature};
use well_core::{DomainError, Geometry, GeometryWarning, Quantity};

/// Inputs for a J-profile solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JParameters {
    /// Build-up rate (deg/100 ft).
    pub bur_deg_100ft: f64,
    pub tvd_ft: f64,
    pub kop_ft: f64,
    /// Horizontal displacement of the target from the wellhead.
    pub displacement_ft: f64,
}

/// Which side of the build radius the target lies on.
///
/// `H == r` falls in `TargetWithinRadius`; there `θ = 0` and both branches
/// agree on `α = 90 − β`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JBranch {
    /// `H > r`: `α = 90 + θ − β`.
    TargetBeyondRadius,
    /// `H ≤ r`: `α = 90 − θ − β`.
    TargetWithinRadius,
}

/// Solved J-profile geometry at full precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JGeometry {
    pub params: JParameters,
    pub branch: JBranch,
    pub radius_ft: f64,
    /// `|H − r|`, horizontal offset of the target from the arc centre.
    pub delta_x_ft: f64,
    /// `TVD − KOP`.
    pub delta_y_ft: f64,
    /// Distance from the arc centre to the target.
    pub hypotenuse_ft: f64,
    pub theta_deg: f64,
    pub beta_deg: f64,
    pub alpha_deg: f64,
    /// Hold inclination; equal to `alpha_deg`.
    pub inclination_deg: f64,
    /// Horizontal displacement gained over the build arc.
    pub chord_x_ft: f64,
    /// Vertical depth gained over the build arc.
    pub chord_y_ft: f64,
    /// Horizontal distance left from end of build to the target.
    pub eob_remaining_x_ft: f64,
    /// Vertical distance left from end of build to the target.
    pub eob_remaining_y_ft: f64,
    /// True vertical depth at end of build.
    pub eob_depth_ft: f64,
    /// Measured length of the build arc.
    pub chord_length_ft: f64,
    /// Measured length of the slant section.
    pub target_section_ft: f64,
    pub md_ft: f64,
    pub max_kop_ft: f64,
    pub warnings: Vec<GeometryWarning>,
}

fn validate(params: &JParameters) -> Result<(), DomainError> {
    DomainError::require_positive("BUR", params.bur_deg_100ft)?;
    DomainError::require_non_negative("KOP", params.kop_ft)?;
    DomainError::require_non_negative("horizontal displacement", params.displacement_ft)?;
    DomainError::require_positive("TVD", params.tvd_ft)?;
    if params.kop_ft >= params.tvd_ft {
        return Err(DomainError::InvalidDepthOrdering {
            kop_ft: params.kop_ft,
            depth_ft: params.tvd_ft,
        });
    }
    Ok(())
}

/// Largest kick-off point that keeps the J geometry consistent: `TVD − |H − r|`,
/// floored at zero. Exceeding it is worth a warning, not a rejection.
pub fn max_kop(bur_deg_100ft: f64, tvd_ft: f64, displacement_ft: f64) -> Result<f64, DomainError> {
    DomainError::require_positive("BUR", bur_deg_100ft)?;
    DomainError::require_positive("TVD", tvd_ft)?;
    DomainError::require_non_negative("horizontal displacement", displacement_ft)?;
    let radius = radius_of_curvature(bur_deg_100ft);
    Ok((tvd_ft - (displacement_ft - radius).abs()).max(0.0))
}

/// Solve the J-profile. Fails only on precondition violations; a cosine
/// argument outside `[-1, 1]` is clamped and reported as a warning.
pub fn solve(params: &JParameters) -> Result<JGeometry, DomainError> {
    validate(params)?;

    let JParameters {
        bur_deg_100ft: bur,
        tvd_ft: tvd,
        kop_ft: kop,
        displacement_ft: h,
    } = *params;

    let radius = radius_of_curvature(bur);
    let branch = if h > radius {
        JBranch::TargetBeyondRadius
    } else {
        JBranch::TargetWithinRadius
    };
    let delta_x = match branch {
        JBranch::TargetBeyondRadius => h - radius,
        JBranch::TargetWithinRadius => radius - h,
    };
    let delta_y = tvd - kop;
    let hypotenuse = delta_x.hypot(delta_y);

    let theta_deg = (delta_x / delta_y).atan().to_degrees();

    let mut warnings = Vec::new();
    let beta = clamped_acos(radius / hypotenuse);
    if beta.clamped {
        log::warn!(
            "J-profile: radius/hypotenuse ratio {:.10} clamped into [-1, 1]",
            beta.ratio
        );
        warnings.push(GeometryWarning::ClampedCosine {
            stage: "beta (radius / hypotenuse)",
            ratio: beta.ratio,
        });
    }
    let beta_deg = beta.angle_rad.to_degrees();

    let alpha_deg = match branch {
        JBranch::TargetBeyondRadius => 90.0 + theta_deg - beta_deg,
        JBranch::TargetWithinRadius => 90.0 - theta_deg - beta_deg,
    };
    log::debug!("J-profile: {branch:?}, r = {radius:.4} ft, alpha = {alpha_deg:.6} deg");

    let alpha_rad = alpha_deg.to_radians();
    let chord_x = radius - radius * alpha_rad.cos();
    let chord_y = radius * alpha_rad.sin();
    let chord_length = arc_length(alpha_deg, bur);
    // Tangent length from the arc to the target; zero when the target sits on the circle.
    let target_section = (hypotenuse * hypotenuse - radius * radius).max(0.0).sqrt();
    let md = kop + chord_length + target_section;

    let max_kop_ft = (tvd - (h - radius).abs()).max(0.0);
    if kop > max_kop_ft {
        log::warn!("J-profile: KOP {kop} ft exceeds suggested maximum {max_kop_ft:.2} ft");
        warnings.push(GeometryWarning::KopAboveMaximum {
            kop_ft: kop,
            max_kop_ft,
        });
    }

    Ok(JGeometry {
        params: *params,
        branch,
        radius_ft: radius,
        delta_x_ft: delta_x,
        delta_y_ft: delta_y,
        hypotenuse_ft: hypotenuse,
        theta_deg,
        beta_deg,
        alpha_deg,
        inclination_deg: alpha_deg,
        chord_x_ft: chord_x,
        chord_y_ft: chord_y,
        eob_remaining_x_ft: h - chord_x,
        eob_remaining_y_ft: tvd - kop - chord_y,
        eob_depth_ft: kop + chord_y,
        chord_length_ft: chord_length,
        target_section_ft: target_section,
        md_ft: md,
        max_kop_ft,
        warnings,
    })
}

impl Geometry for JGeometry {
    fn profile(&self) -> &'static str {
        "J"
    }

    fn quantities(&self) -> Vec<Quantity> {
        vec![
            Quantity::feet("radius", "Radius of curvature", self.radius_ft),
            Quantity::feet("hypotenuse", "Hypotenuse", self.hypotenuse_ft),
            Quantity::degrees("theta", "Theta angle", self.theta_deg),
            Quantity::degrees("beta", "Beta angle", self.beta_deg),
            Quantity::degrees("alpha", "Alpha angle", self.alpha_deg),
            Quantity::degrees("inclination", "Inclination", self.inclination_deg),
            Quantity::feet("chord_x", "Chord X", self.chord_x_ft),
            Quantity::feet("chord_y", "Chord Y", self.chord_y_ft),
            Quantity::feet("eob_remaining_x", "EOB to target, horizontal", self.eob_remaining_x_ft),
            Quantity::feet("eob_remaining_y", "EOB to target, vertical", self.eob_remaining_y_ft),
            Quantity::feet("eob_depth", "EOB vertical depth", self.eob_depth_ft),
            Quantity::feet("chord_length", "Build section length", self.chord_length_ft),
            Quantity::feet("target_section", "Target section length", self.target_section_ft),
            Quantity::feet("md", "Measured depth", self.md_ft),
            Quantity::feet("max_kop", "Suggested maximum KOP", self.max_kop_ft),
        ]
    }

    fn warnings(&self) -> &[GeometryWarning] {
        &self.warnings
    }
}
