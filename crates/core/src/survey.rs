//! Survey stations and the ordered survey they form.

use std::fmt;

use serde::{Serialize, Serializer};

/// Label attached to every station, used to color and group sections.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionLabel {
    Vertical,
    Build,
    Tangent,
    Drop,
    FinalVertical,
    /// User-declared section of a vertical profile.
    Named(String),
}

impl SectionLabel {
    pub fn as_str(&self) -> &str {
        match self {
            SectionLabel::Vertical => "Vertical",
            SectionLabel::Build => "Incremento",
            SectionLabel::Tangent => "Tangencial",
            SectionLabel::Drop => "Disminución",
            SectionLabel::FinalVertical => "Vertical Final",
            SectionLabel::Named(name) => name,
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SectionLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One survey station. `z` is negative below surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub section: SectionLabel,
}

impl SurveyPoint {
    /// Station in the x/z plane (`y = 0`).
    pub fn planar(x: f64, z: f64, section: SectionLabel) -> Self {
        Self {
            x,
            y: 0.0,
            z,
            section,
        }
    }
}

/// Ordered stations, surface to target, concatenated section by section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Survey {
    points: Vec<SurveyPoint>,
}

impl Survey {
    /// Concatenate section point sets in drilling order.
    pub fn from_sections<I>(sections: I) -> Self
    where
        I: IntoIterator<Item = Vec<SurveyPoint>>,
    {
        Self {
            points: sections.into_iter().flatten().collect(),
        }
    }

    pub fn points(&self) -> &[SurveyPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SurveyPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Deepest station as a positive depth (ft).
    pub fn max_depth_ft(&self) -> f64 {
        self.points.iter().map(|p| -p.z).fold(0.0, f64::max)
    }

    /// Contiguous runs of stations sharing a label, in drilling order.
    pub fn sections(&self) -> Vec<(&SectionLabel, &[SurveyPoint])> {
        let mut runs = Vec::new();
        let mut start = 0;
        for i in 1..=self.points.len() {
            let boundary =
                i == self.points.len() || self.points[i].section != self.points[start].section;
            if boundary {
                runs.push((&self.points[start].section, &self.points[start..i]));
                start = i;
            }
        }
        runs
    }
}

impl<'a> IntoIterator for &'a Survey {
    type Item = &'a SurveyPoint;
    type IntoIter = std::slice::Iter<'a, SurveyPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
