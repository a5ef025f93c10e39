//! Vertical well surveys built from user-declared depth sections.
//!
//! Depth accumulates section by section from surface; each section is
//! walked at a fixed interval from its top (inclusive) toward its bottom
//! (exclusive), so consecutive sections never share a station.

use serde::Serialize;
use well_core::sampling::stepped;
use well_core::units::z_from_depth;
use well_core::{DomainError, SectionLabel, Survey, SurveyPoint, require_station_budget};

/// One declared section of a vertical well.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalSection {
    pub label: String,
    pub length_ft: f64,
}

impl VerticalSection {
    pub fn new(label: impl Into<String>, length_ft: f64) -> Self {
        Self {
            label: label.into(),
            length_ft,
        }
    }
}

/// Top and bottom of a declared section, as positive depths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionInterval {
    pub label: String,
    pub top_ft: f64,
    pub bottom_ft: f64,
}

/// Cumulative-depth table for the declared sections.
pub fn section_intervals(sections: &[VerticalSection]) -> Result<Vec<SectionInterval>, DomainError> {
    let mut top = 0.0;
    sections
        .iter()
        .map(|section| {
            DomainError::require_non_negative("section length", section.length_ft)?;
            let bottom = top + section.length_ft;
            let interval = SectionInterval {
                label: section.label.clone(),
                top_ft: top,
                bottom_ft: bottom,
            };
            top = bottom;
            Ok(interval)
        })
        .collect()
}

/// Build the survey: stations every `interval_ft` down each section.
pub fn build(sections: &[VerticalSection], interval_ft: f64) -> Result<Survey, DomainError> {
    DomainError::require_positive("survey interval", interval_ft)?;
    let intervals = section_intervals(sections)?;
    for section in sections {
        require_station_budget("survey interval", section.length_ft, interval_ft)?;
    }

    let survey = Survey::from_sections(intervals.iter().map(|interval| {
        let label = SectionLabel::Named(interval.label.clone());
        stepped(interval.top_ft, interval.bottom_ft, interval_ft)
            .into_iter()
            .map(|depth| SurveyPoint::planar(0.0, z_from_depth(depth), label.clone()))
            .collect()
    }));

    log::debug!(
        "vertical survey: {} sections, {} stations, interval {interval_ft} ft",
        sections.len(),
        survey.len()
    );
    Ok(survey)
}
