//! Station sampling for a solved J-profile.

use well_core::sampling::{linspace, stepped};
use well_core::units::z_from_depth;
use well_core::{Discretization, SectionLabel, Survey, SurveyPoint};

use crate::solver::JGeometry;

/// Vertical to KOP, build arc in fixed angular steps up to the hold
/// inclination, then the straight slant from end of build to the target.
pub fn discretize(geometry: &JGeometry, settings: &Discretization) -> Survey {
    let kop = geometry.params.kop_ft;
    let radius = geometry.radius_ft;

    let vertical: Vec<SurveyPoint> = stepped(0.0, kop, settings.vertical_step_ft)
        .into_iter()
        .map(|depth| SurveyPoint::planar(0.0, z_from_depth(depth), SectionLabel::Vertical))
        .collect();

    let build: Vec<SurveyPoint> = build_angles(geometry.alpha_deg, settings.arc_step_deg)
        .into_iter()
        .map(|phi_deg| {
            let phi = phi_deg.to_radians();
            SurveyPoint::planar(
                radius * (1.0 - phi.cos()),
                z_from_depth(kop + radius * phi.sin()),
                SectionLabel::Build,
            )
        })
        .collect();

    let xs = linspace(
        geometry.chord_x_ft,
        geometry.params.displacement_ft,
        settings.tangent_samples,
    );
    let depths = linspace(
        geometry.eob_depth_ft,
        geometry.params.tvd_ft,
        settings.tangent_samples,
    );
    let tangent: Vec<SurveyPoint> = xs
        .into_iter()
        .zip(depths)
        .map(|(x, depth)| SurveyPoint::planar(x, z_from_depth(depth), SectionLabel::Tangent))
        .collect();

    log::debug!(
        "J survey: {} vertical, {} build, {} tangent stations",
        vertical.len(),
        build.len(),
        tangent.len()
    );
    Survey::from_sections([vertical, build, tangent])
}

/// `0, step, 2·step, ...` toward `alpha_deg`, closed with `alpha_deg` itself so
/// the arc ends exactly at end of build. Negative inclinations walk downward.
fn build_angles(alpha_deg: f64, step_deg: f64) -> Vec<f64> {
    let sign = if alpha_deg < 0.0 { -1.0 } else { 1.0 };
    let mut angles: Vec<f64> = stepped(0.0, alpha_deg.abs(), step_deg)
        .into_iter()
        .map(|a| sign * a)
        .collect();
    angles.push(alpha_deg);
    angles
}
