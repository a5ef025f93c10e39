//! Export helpers for survey CSV, geometry JSON, and plain-text tables.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod survey {
    use std::io::Write;

    use serde::{Deserialize, Serialize};
    use well_core::Survey;

    /// Column order of the survey CSV.
    pub const HEADER: [&str; 5] = ["index", "x_ft", "y_ft", "z_ft", "section"];

    /// CSV row emitted by the survey exporter.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Record {
        pub index: usize,
        pub x_ft: f64,
        pub y_ft: f64,
        pub z_ft: f64,
        pub section: String,
    }

    /// Flatten a survey into CSV rows.
    pub fn records(survey: &Survey) -> Vec<Record> {
        survey
            .iter()
            .enumerate()
            .map(|(index, p)| Record {
                index,
                x_ft: p.x,
                y_ft: p.y,
                z_ft: p.z,
                section: p.section.to_string(),
            })
            .collect()
    }

    /// Write the survey as CSV with a header row.
    pub fn write_csv<W: Write>(writer: W, survey: &Survey) -> csv::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for record in records(survey) {
            wtr.serialize(record)?;
        }
        if survey.is_empty() {
            wtr.write_record(HEADER)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Read survey rows back, e.g. for plotting.
    pub fn read_csv<R: std::io::Read>(reader: R) -> csv::Result<Vec<Record>> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        let rows = rdr.deserialize().collect();
        rows
    }
}

pub mod report {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};
    use well_core::{Geometry, GeometryWarning, Unit};

    /// Metadata describing the run that produced a geometry.
    #[derive(Debug)]
    pub struct Metadata<'a> {
        pub scenario: &'a str,
        pub generated_utc: &'a str,
        pub station_count: usize,
    }

    #[derive(Serialize)]
    struct QuantityEntry<'a> {
        key: &'a str,
        label: &'a str,
        unit: Unit,
        value: f64,
        display: f64,
    }

    #[derive(Serialize)]
    struct GeometryReport<'a> {
        profile: &'a str,
        scenario: &'a str,
        generated_utc: &'a str,
        station_count: usize,
        quantities: Vec<QuantityEntry<'a>>,
        warnings: &'a [GeometryWarning],
        messages: Vec<String>,
    }

    /// Write a pretty-printed JSON report of a solved geometry.
    pub fn write_json<G: Geometry>(
        writer: &mut dyn Write,
        meta: &Metadata<'_>,
        geometry: &G,
    ) -> io::Result<()> {
        let quantities = geometry.quantities();
        let report = GeometryReport {
            profile: geometry.profile(),
            scenario: meta.scenario,
            generated_utc: meta.generated_utc,
            station_count: meta.station_count,
            quantities: quantities
                .iter()
                .map(|q| QuantityEntry {
                    key: q.key,
                    label: q.label,
                    unit: q.unit,
                    value: q.value,
                    display: q.display_value(),
                })
                .collect(),
            warnings: geometry.warnings(),
            messages: geometry.warnings().iter().map(|w| w.to_string()).collect(),
        };
        to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)
    }
}

pub mod table {
    use well_core::Quantity;

    /// Render quantities as an aligned two-column table with display rounding.
    pub fn render(title: &str, quantities: &[Quantity]) -> String {
        let width = quantities
            .iter()
            .map(|q| q.label.chars().count())
            .max()
            .unwrap_or(0);
        let mut out = format!("=== {title} ===\n");
        for q in quantities {
            let pad = width - q.label.chars().count();
            out.push_str(&format!(
                "{}{} : {:>12.2} {}\n",
                q.label,
                " ".repeat(pad),
                q.display_value(),
                q.unit.symbol()
            ));
        }
        out
    }
}
