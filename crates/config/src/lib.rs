//! Scenario models and loaders for well trajectory runs.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use well_core::Discretization;

/// A named well scenario parsed from YAML or TOML.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub discretization: Discretization,
    pub well: WellConfig,
}

/// Profile parameters, tagged by profile type.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum WellConfig {
    #[serde(rename = "vertical")]
    Vertical {
        interval_ft: f64,
        sections: Vec<SectionConfig>,
    },
    #[serde(rename = "j")]
    J {
        bur_deg_100ft: f64,
        tvd_ft: f64,
        kop_ft: f64,
        displacement_ft: f64,
    },
    #[serde(rename = "s")]
    S {
        bur_deg_100ft: f64,
        dor_deg_100ft: f64,
        kop_ft: f64,
        d3_ft: f64,
        d4_ft: f64,
        tvd_ft: f64,
        x4_ft: f64,
    },
    #[serde(other)]
    Unsupported,
}

/// One declared section of a vertical well.
#[derive(Debug, Deserialize, Clone)]
pub struct SectionConfig {
    #[serde(default)]
    pub label: Option<String>,
    pub length_ft: f64,
}

/// Errors that can occur while loading scenario files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// On-disk scenario encodings, picked by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    /// One scenario per file.
    Toml,
    /// A list of scenarios per file.
    Yaml,
}

impl Format {
    fn of(path: &Path) -> Option<Format> {
        match path.extension()?.to_str()? {
            "toml" => Some(Format::Toml),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

/// Load scenarios from a YAML list, a single TOML file, or a directory.
///
/// Directory entries are read in path order; files with other extensions
/// are skipped. A file without a recognised extension is read as YAML.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    let path = path.as_ref();
    if !path.is_dir() {
        return read_file(path, Format::of(path).unwrap_or(Format::Yaml));
    }

    let mut files: Vec<(PathBuf, Format)> = std::fs::read_dir(path)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter_map(|file| Format::of(&file).map(|format| (file, format)))
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut scenarios = Vec::new();
    for (file, format) in files {
        scenarios.extend(read_file(&file, format)?);
    }
    Ok(scenarios)
}

/// Parse one scenario from a TOML string.
pub fn parse_scenario_toml(contents: &str) -> Result<ScenarioConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

fn read_file(path: &Path, format: Format) -> Result<Vec<ScenarioConfig>, ConfigError> {
    match format {
        Format::Toml => {
            let contents = std::fs::read_to_string(path)?;
            Ok(vec![parse_scenario_toml(&contents)?])
        }
        Format::Yaml => Ok(serde_yaml::from_reader(File::open(path)?)?),
    }
}
