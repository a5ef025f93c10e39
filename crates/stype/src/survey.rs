//! Station sampling for a solved S-profile.

use well_core::sampling::{linspace, stepped};
use well_core::units::z_from_depth;
use well_core::{Discretization, SectionLabel, Survey, SurveyPoint};

use crate::solver::SGeometry;

/// Vertical to KOP, build arc, tangent, drop arc, final vertical.
pub fn discretize(geometry: &SGeometry, settings: &Discretization) -> Survey {
    let p = &geometry.params;
    let theta = geometry.theta_rad;

    let vertical: Vec<SurveyPoint> = stepped(0.0, p.kop_ft, settings.vertical_step_ft)
        .into_iter()
        .map(|depth| SurveyPoint::planar(0.0, z_from_depth(depth), SectionLabel::Vertical))
        .collect();

    let build: Vec<SurveyPoint> = linspace(0.0, theta, settings.arc_samples)
        .into_iter()
        .map(|phi| {
            SurveyPoint::planar(
                geometry.r1_ft * (1.0 - phi.cos()),
                z_from_depth(p.kop_ft + geometry.r1_ft * phi.sin()),
                SectionLabel::Build,
            )
        })
        .collect();

    let tangent: Vec<SurveyPoint> = linspace(geometry.x2_ft, geometry.x3_ft, settings.tangent_samples)
        .into_iter()
        .zip(linspace(geometry.d2_ft, p.d3_ft, settings.tangent_samples))
        .map(|(x, depth)| SurveyPoint::planar(x, z_from_depth(depth), SectionLabel::Tangent))
        .collect();

    let drop = drop_arc(geometry, settings.arc_samples);

    let final_vertical: Vec<SurveyPoint> =
        linspace(p.d4_ft, p.tvd_ft, settings.final_vertical_samples)
            .into_iter()
            .map(|depth| SurveyPoint::planar(p.x4_ft, z_from_depth(depth), SectionLabel::FinalVertical))
            .collect();

    log::debug!(
        "S survey: {} vertical, {} build, {} tangent, {} drop, {} final vertical stations",
        vertical.len(),
        build.len(),
        tangent.len(),
        drop.len(),
        final_vertical.len()
    );
    Survey::from_sections([vertical, build, tangent, drop, final_vertical])
}

/// Drop arc from the end of the tangent `(x3, D3)` back to vertical.
///
/// At inclination `φ` on an arc of radius `r2` entered at `θ`, the station
/// sits `r2(cos φ − cos θ)` right of and `r2(sin θ − sin φ)` below the entry
/// point. The entry station itself belongs to the tangent, so sampling starts
/// one step in and ends at `φ = 0`.
fn drop_arc(geometry: &SGeometry, samples: usize) -> Vec<SurveyPoint> {
    let theta = geometry.theta_rad;
    let r2 = geometry.r2_ft;
    let (sin_t, cos_t) = theta.sin_cos();
    let step = theta / samples as f64;

    (1..=samples)
        .map(|k| {
            let phi = if k == samples {
                0.0
            } else {
                theta - step * k as f64
            };
            SurveyPoint::planar(
                geometry.x3_ft + r2 * (phi.cos() - cos_t),
                z_from_depth(geometry.params.d3_ft + r2 * (sin_t - phi.sin())),
                SectionLabel::Drop,
            )
        })
        .collect()
}
