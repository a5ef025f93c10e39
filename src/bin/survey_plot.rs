use clap::Parser;
use plotters::prelude::*;
use std::fs::{self, File};
use std::path::PathBuf;
use well_trajectory::export::survey::{Record, read_csv};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render the vertical-section view of a survey CSV, one colour per section"
)]
struct Cli {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "artifacts/survey.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 900)]
    width: u32,
    #[arg(long, default_value_t = 1200)]
    height: u32,
    /// Skip caption, axis labels and legend (hosts without system fonts)
    #[arg(long, default_value_t = false)]
    no_text: bool,
}

const SECTION_COLORS: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(23, 190, 207),
];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let records = read_csv(File::open(&cli.input)?)?;
    if records.is_empty() {
        return Err(anyhow::anyhow!(
            "Survey CSV {} has no stations",
            cli.input.display()
        ));
    }
    let groups = group_by_section(&records);
    log::debug!(
        "plotting {} stations in {} sections",
        records.len(),
        groups.len()
    );

    let (x_range, z_range) = plot_ranges(&records);

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let root = BitMapBackend::new(&cli.output, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if !cli.no_text {
        builder
            .caption("Vertical section", ("sans-serif", 24))
            .x_label_area_size(50)
            .y_label_area_size(70);
    }
    let mut chart = builder.build_cartesian_2d(x_range, z_range)?;

    if !cli.no_text {
        chart
            .configure_mesh()
            .x_desc("Horizontal displacement (ft)")
            .y_desc("Vertical depth (ft)")
            .x_labels(6)
            .y_labels(10)
            .y_label_formatter(&|z| format!("{:.0}", -z))
            .draw()?;
    }

    for (i, (label, points)) in groups.iter().enumerate() {
        let color = SECTION_COLORS[i % SECTION_COLORS.len()];
        let series = chart.draw_series(LineSeries::new(
            points.iter().copied(),
            ShapeStyle::from(&color).stroke_width(2),
        ))?;
        if !cli.no_text {
            series
                .label(label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        }
    }

    if !cli.no_text {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}

/// Contiguous runs of stations sharing a section label, in survey order.
fn group_by_section(records: &[Record]) -> Vec<(String, Vec<(f64, f64)>)> {
    let mut groups: Vec<(String, Vec<(f64, f64)>)> = Vec::new();
    for record in records {
        match groups.last_mut() {
            Some((label, points)) if *label == record.section => {
                points.push((record.x_ft, record.z_ft));
            }
            _ => groups.push((record.section.clone(), vec![(record.x_ft, record.z_ft)])),
        }
    }
    groups
}

/// Axis ranges with a margin; a purely vertical well gets a symmetric x span.
fn plot_ranges(records: &[Record]) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let mut z_min = 0.0_f64;
    for r in records {
        x_min = x_min.min(r.x_ft);
        x_max = x_max.max(r.x_ft);
        z_min = z_min.min(r.z_ft);
    }
    let depth = (-z_min).max(1.0);
    let x_span = x_max - x_min;
    let x_pad = if x_span > 0.0 { x_span * 0.1 } else { depth * 0.05 };
    (
        (x_min - x_pad)..(x_max + x_pad),
        (z_min - depth * 0.02)..(depth * 0.02),
    )
}
