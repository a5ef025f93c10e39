use thiserror::Error;

/// Precondition failures that abort a solve before any geometry is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error(
        "kick-off point ({kop_ft} ft) must be shallower than the depth it builds toward ({depth_ft} ft); lower the KOP or deepen the target"
    )]
    InvalidDepthOrdering { kop_ft: f64, depth_ft: f64 },

    #[error(
        "checkpoints must satisfy D3 < D4 < TVD (got D3 = {d3_ft} ft, D4 = {d4_ft} ft, TVD = {tvd_ft} ft); adjust D3, D4 or TVD"
    )]
    InvalidCheckpointOrdering { d3_ft: f64, d4_ft: f64, tvd_ft: f64 },

    #[error("{name} = {value} is invalid: {requirement}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

impl DomainError {
    /// Require a finite, strictly positive value.
    pub fn require_positive(name: &'static str, value: f64) -> Result<(), DomainError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(DomainError::InvalidParameter {
                name,
                value,
                requirement: "must be a finite value greater than zero",
            })
        }
    }

    /// Require a finite value that is zero or greater.
    pub fn require_non_negative(name: &'static str, value: f64) -> Result<(), DomainError> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(DomainError::InvalidParameter {
                name,
                value,
                requirement: "must be a finite value of zero or more",
            })
        }
    }
}
