use serde::Deserialize;

use crate::error::DomainError;

/// Upper bound on the stations generated for any single section.
pub const MAX_SECTION_STATIONS: usize = 100_000;

/// Sampling density used when turning closed-form geometry into stations.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Discretization {
    /// Stations per S-profile arc (build and drop).
    pub arc_samples: usize,
    /// Stations per straight tangent section.
    pub tangent_samples: usize,
    /// Stations on the S-profile final vertical run.
    pub final_vertical_samples: usize,
    /// Angular step along the J-profile build arc (deg).
    pub arc_step_deg: f64,
    /// Depth step on the surface-to-KOP vertical section (ft).
    pub vertical_step_ft: f64,
}

impl Default for Discretization {
    fn default() -> Self {
        Self {
            arc_samples: 100,
            tangent_samples: 100,
            final_vertical_samples: 100,
            arc_step_deg: 1.0,
            vertical_step_ft: 1.0,
        }
    }
}

impl Discretization {
    pub fn validate(&self) -> Result<(), DomainError> {
        for (name, count) in [
            ("arc_samples", self.arc_samples),
            ("tangent_samples", self.tangent_samples),
            ("final_vertical_samples", self.final_vertical_samples),
        ] {
            if count < 2 {
                return Err(DomainError::InvalidParameter {
                    name,
                    value: count as f64,
                    requirement: "needs at least two samples to span a section",
                });
            }
            if count > MAX_SECTION_STATIONS {
                return Err(DomainError::InvalidParameter {
                    name,
                    value: count as f64,
                    requirement: "must not exceed 100000 samples per section; lower the sample count",
                });
            }
        }
        DomainError::require_positive("arc_step_deg", self.arc_step_deg)?;
        DomainError::require_positive("vertical_step_ft", self.vertical_step_ft)
    }
}

/// Reject a fixed step that would walk `span` in more than
/// [`MAX_SECTION_STATIONS`] stations.
pub fn require_station_budget(name: &'static str, span: f64, step: f64) -> Result<(), DomainError> {
    DomainError::require_positive(name, step)?;
    let stations = (span.abs() / step).ceil();
    if stations.is_finite() && stations <= MAX_SECTION_STATIONS as f64 {
        Ok(())
    } else {
        Err(DomainError::InvalidParameter {
            name,
            value: step,
            requirement: "implies more than 100000 stations in one section; use a coarser step",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_counts_are_bounded_on_both_sides() {
        assert!(Discretization::default().validate().is_ok());
        for arc_samples in [0, 1, MAX_SECTION_STATIONS + 1, usize::MAX] {
            let settings = Discretization {
                arc_samples,
                ..Discretization::default()
            };
            assert!(settings.validate().is_err(), "{arc_samples}");
        }
        let at_cap = Discretization {
            final_vertical_samples: MAX_SECTION_STATIONS,
            ..Discretization::default()
        };
        assert!(at_cap.validate().is_ok());
    }

    #[test]
    fn station_budget_follows_span() {
        assert!(require_station_budget("vertical_step_ft", 2000.0, 1.0).is_ok());
        assert!(require_station_budget("vertical_step_ft", 100_000.0, 1.0).is_ok());
        assert!(require_station_budget("vertical_step_ft", 100_000.5, 1.0).is_err());
        assert!(require_station_budget("arc_step_deg", 26.0, 1e-9).is_err());
        assert!(require_station_budget("arc_step_deg", 26.0, 0.0).is_err());
    }
}
