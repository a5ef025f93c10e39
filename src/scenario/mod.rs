use std::path::Path;

use thiserror::Error;

use crate::config::{ConfigError, ScenarioConfig, WellConfig, load_scenarios};
use crate::engine::{self, ProfileRequest, ProfileSolution};
use well_core::{Discretization, DomainError};
use well_jtype::JParameters;
use well_stype::SParameters;
use well_vertical::VerticalSection;

/// A scenario ready to hand to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub request: ProfileRequest,
    pub discretization: Discretization,
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("scenario '{0}' uses an unsupported well type; expected vertical, j or s")]
    UnsupportedProfile(String),
    #[error("scenario '{0}' not found")]
    NotFound(String),
    #[error("scenario '{name}': {source}")]
    Domain {
        name: String,
        #[source]
        source: DomainError,
    },
}

impl Scenario {
    pub fn solve(&self) -> Result<ProfileSolution, ScenarioError> {
        engine::solve(&self.request, &self.discretization).map_err(|source| ScenarioError::Domain {
            name: self.name.clone(),
            source,
        })
    }
}

impl TryFrom<ScenarioConfig> for Scenario {
    type Error = ScenarioError;

    fn try_from(value: ScenarioConfig) -> Result<Self, Self::Error> {
        let request = match value.well {
            WellConfig::Vertical {
                interval_ft,
                sections,
            } => ProfileRequest::Vertical {
                sections: sections
                    .into_iter()
                    .enumerate()
                    .map(|(i, section)| {
                        VerticalSection::new(
                            section.label.unwrap_or_else(|| default_section_label(i)),
                            section.length_ft,
                        )
                    })
                    .collect(),
                interval_ft,
            },
            WellConfig::J {
                bur_deg_100ft,
                tvd_ft,
                kop_ft,
                displacement_ft,
            } => ProfileRequest::J(JParameters {
                bur_deg_100ft,
                tvd_ft,
                kop_ft,
                displacement_ft,
            }),
            WellConfig::S {
                bur_deg_100ft,
                dor_deg_100ft,
                kop_ft,
                d3_ft,
                d4_ft,
                tvd_ft,
                x4_ft,
            } => ProfileRequest::S(SParameters {
                bur_deg_100ft,
                dor_deg_100ft,
                kop_ft,
                d3_ft,
                d4_ft,
                tvd_ft,
                x4_ft,
            }),
            WellConfig::Unsupported => {
                return Err(ScenarioError::UnsupportedProfile(value.name));
            }
        };

        Ok(Scenario {
            name: value.name,
            description: value.description,
            request,
            discretization: value.discretization,
        })
    }
}

/// Label given to an unlabelled vertical section (1-based).
pub fn default_section_label(index: usize) -> String {
    format!("Sección {}", index + 1)
}

/// Load every scenario at `path` (YAML list, TOML file, or a directory of either).
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, ScenarioError> {
    load_scenarios(path)?
        .into_iter()
        .map(Scenario::try_from)
        .collect()
}

/// Load scenarios and pick one by name (case-insensitive), or the first when no name is given.
pub fn select<P: AsRef<Path>>(path: P, name: Option<&str>) -> Result<Scenario, ScenarioError> {
    let scenarios = load(path)?;
    match name {
        Some(name) => {
            let upper = name.to_uppercase();
            scenarios
                .into_iter()
                .find(|s| s.name.to_uppercase() == upper)
                .ok_or_else(|| ScenarioError::NotFound(name.to_string()))
        }
        None => scenarios
            .into_iter()
            .next()
            .ok_or_else(|| ScenarioError::NotFound("<first>".to_string())),
    }
}
