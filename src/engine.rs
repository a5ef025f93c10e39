//! One entry point per profile type, plus a dispatcher over all three.
//!
//! Every call is a pure function of its inputs: parameters in, geometry and
//! survey out. Nothing is cached between calls.

use well_core::{
    Discretization, DomainError, Geometry, GeometryWarning, Quantity, Survey, require_station_budget,
};
use well_jtype::{JGeometry, JParameters};
use well_stype::{SGeometry, SParameters};
use well_vertical::VerticalSection;

/// Build a vertical survey with stations every `interval_ft`.
pub fn solve_vertical(sections: &[VerticalSection], interval_ft: f64) -> Result<Survey, DomainError> {
    well_vertical::build(sections, interval_ft)
}

/// Solve and sample a J-profile with default sampling.
pub fn solve_j(params: &JParameters) -> Result<(JGeometry, Survey), DomainError> {
    solve_j_with(params, &Discretization::default())
}

/// Solve and sample a J-profile. Sampling settings, including the station
/// count each step implies, are checked before any station is generated.
pub fn solve_j_with(
    params: &JParameters,
    settings: &Discretization,
) -> Result<(JGeometry, Survey), DomainError> {
    settings.validate()?;
    let geometry = well_jtype::solve(params)?;
    require_station_budget("vertical_step_ft", params.kop_ft, settings.vertical_step_ft)?;
    require_station_budget("arc_step_deg", geometry.alpha_deg, settings.arc_step_deg)?;
    let survey = well_jtype::discretize(&geometry, settings);
    Ok((geometry, survey))
}

/// Solve and sample an S-profile with default sampling.
pub fn solve_s(params: &SParameters) -> Result<(SGeometry, Survey), DomainError> {
    solve_s_with(params, &Discretization::default())
}

pub fn solve_s_with(
    params: &SParameters,
    settings: &Discretization,
) -> Result<(SGeometry, Survey), DomainError> {
    settings.validate()?;
    let geometry = well_stype::solve(params)?;
    require_station_budget("vertical_step_ft", params.kop_ft, settings.vertical_step_ft)?;
    let survey = well_stype::discretize(&geometry, settings);
    Ok((geometry, survey))
}

/// A request for exactly one profile type.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileRequest {
    Vertical {
        sections: Vec<VerticalSection>,
        interval_ft: f64,
    },
    J(JParameters),
    S(SParameters),
}

/// The result matching a [`ProfileRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileSolution {
    Vertical { survey: Survey },
    J { geometry: JGeometry, survey: Survey },
    S { geometry: SGeometry, survey: Survey },
}

impl ProfileSolution {
    pub fn survey(&self) -> &Survey {
        match self {
            ProfileSolution::Vertical { survey }
            | ProfileSolution::J { survey, .. }
            | ProfileSolution::S { survey, .. } => survey,
        }
    }

    pub fn profile(&self) -> &'static str {
        match self {
            ProfileSolution::Vertical { .. } => "Vertical",
            ProfileSolution::J { geometry, .. } => geometry.profile(),
            ProfileSolution::S { geometry, .. } => geometry.profile(),
        }
    }

    /// Named results; empty for a vertical profile.
    pub fn quantities(&self) -> Vec<Quantity> {
        match self {
            ProfileSolution::Vertical { .. } => Vec::new(),
            ProfileSolution::J { geometry, .. } => geometry.quantities(),
            ProfileSolution::S { geometry, .. } => geometry.quantities(),
        }
    }

    pub fn warnings(&self) -> &[GeometryWarning] {
        match self {
            ProfileSolution::Vertical { .. } => &[],
            ProfileSolution::J { geometry, .. } => geometry.warnings(),
            ProfileSolution::S { geometry, .. } => geometry.warnings(),
        }
    }
}

/// Dispatch a request to its solver.
pub fn solve(
    request: &ProfileRequest,
    settings: &Discretization,
) -> Result<ProfileSolution, DomainError> {
    match request {
        ProfileRequest::Vertical {
            sections,
            interval_ft,
        } => solve_vertical(sections, *interval_ft).map(|survey| ProfileSolution::Vertical { survey }),
        ProfileRequest::J(params) => {
            let (geometry, survey) = solve_j_with(params, settings)?;
            Ok(ProfileSolution::J { geometry, survey })
        }
        ProfileRequest::S(params) => {
            let (geometry, survey) = solve_s_with(params, settings)?;
            Ok(ProfileSolution::S { geometry, survey })
        }
    }
}
