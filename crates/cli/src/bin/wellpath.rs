use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use well_trajectory::common::{Discretization, Survey};
use well_trajectory::engine::{self, ProfileRequest, ProfileSolution};
use well_trajectory::export::{self, report, survey, table};
use well_trajectory::jtype::JParameters;
use well_trajectory::scenario::{self, default_section_label};
use well_trajectory::stype::SParameters;
use well_trajectory::vertical::{self, VerticalSection};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Directional well trajectory calculator (vertical, J and S profiles)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    sampling: SamplingArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Straight vertical well built from declared sections
    Vertical {
        /// Section as LABEL=LENGTH_FT or just LENGTH_FT, repeated in drilling order
        #[arg(long = "section", required = true, value_parser = parse_section)]
        sections: Vec<SectionArg>,

        /// Survey station interval in ft
        #[arg(long, default_value_t = 100.0)]
        interval: f64,
    },
    /// Build-and-hold (J) well
    J {
        /// Build-up rate (deg/100 ft)
        #[arg(long, default_value_t = 1.5)]
        bur: f64,
        /// Total vertical depth (ft)
        #[arg(long, default_value_t = 9000.0)]
        tvd: f64,
        /// Kick-off point (ft)
        #[arg(long, default_value_t = 2000.0)]
        kop: f64,
        /// Horizontal displacement of the target (ft)
        #[arg(long, default_value_t = 3000.0)]
        displacement: f64,
    },
    /// Build-hold-drop (S) well
    S {
        /// Build-up rate (deg/100 ft)
        #[arg(long, default_value_t = 3.0)]
        bur: f64,
        /// Drop-off rate (deg/100 ft)
        #[arg(long, default_value_t = 2.5)]
        dor: f64,
        /// Kick-off point (ft)
        #[arg(long, default_value_t = 2100.0)]
        kop: f64,
        /// Vertical depth at end of tangent (ft)
        #[arg(long, default_value_t = 6900.0)]
        d3: f64,
        /// Vertical depth at end of drop (ft)
        #[arg(long, default_value_t = 8000.0)]
        d4: f64,
        /// Total vertical depth (ft)
        #[arg(long, default_value_t = 9300.0)]
        tvd: f64,
        /// Horizontal displacement of the target (ft)
        #[arg(long, default_value_t = 2600.0)]
        x4: f64,
    },
    /// Run a scenario from a TOML/YAML file or directory
    Scenario {
        #[arg(long)]
        file: PathBuf,
        /// Scenario name (defaults to the first one in the file)
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Write the survey as CSV (`-` for stdout)
    #[arg(long, global = true)]
    survey_out: Option<PathBuf>,

    /// Write the geometry report as JSON (`-` for stdout)
    #[arg(long, global = true)]
    geometry_out: Option<PathBuf>,

    /// Print every survey station after the results table
    #[arg(long, global = true, default_value_t = false)]
    print_survey: bool,
}

#[derive(Args)]
struct SamplingArgs {
    /// Stations per S-profile arc
    #[arg(long, global = true)]
    arc_samples: Option<usize>,

    /// Stations per tangent section
    #[arg(long, global = true)]
    tangent_samples: Option<usize>,

    /// Stations on the S-profile final vertical run
    #[arg(long, global = true)]
    final_vertical_samples: Option<usize>,

    /// Angular step along the J-profile build arc (deg)
    #[arg(long, global = true)]
    arc_step: Option<f64>,

    /// Depth step from surface to KOP (ft)
    #[arg(long, global = true)]
    vertical_step: Option<f64>,
}

impl SamplingArgs {
    fn apply(&self, mut settings: Discretization) -> Discretization {
        if let Some(v) = self.arc_samples {
            settings.arc_samples = v;
        }
        if let Some(v) = self.tangent_samples {
            settings.tangent_samples = v;
        }
        if let Some(v) = self.final_vertical_samples {
            settings.final_vertical_samples = v;
        }
        if let Some(v) = self.arc_step {
            settings.arc_step_deg = v;
        }
        if let Some(v) = self.vertical_step {
            settings.vertical_step_ft = v;
        }
        settings
    }
}

#[derive(Clone, Debug)]
struct SectionArg {
    label: Option<String>,
    length_ft: f64,
}

fn parse_section(raw: &str) -> Result<SectionArg, String> {
    let (label, length) = match raw.rsplit_once('=') {
        Some((label, length)) => (Some(label.trim().to_string()), length),
        None => (None, raw),
    };
    let length_ft = length
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid section length '{length}': {e}"))?;
    Ok(SectionArg { label, length_ft })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let (name, description, request, base_settings) = match cli.command {
        Command::Vertical { sections, interval } => {
            let sections = sections
                .into_iter()
                .enumerate()
                .map(|(i, s)| {
                    VerticalSection::new(s.label.unwrap_or_else(|| default_section_label(i)), s.length_ft)
                })
                .collect();
            (
                "vertical".to_string(),
                None,
                ProfileRequest::Vertical {
                    sections,
                    interval_ft: interval,
                },
                Discretization::default(),
            )
        }
        Command::J {
            bur,
            tvd,
            kop,
            displacement,
        } => (
            "j".to_string(),
            None,
            ProfileRequest::J(JParameters {
                bur_deg_100ft: bur,
                tvd_ft: tvd,
                kop_ft: kop,
                displacement_ft: displacement,
            }),
            Discretization::default(),
        ),
        Command::S {
            bur,
            dor,
            kop,
            d3,
            d4,
            tvd,
            x4,
        } => (
            "s".to_string(),
            None,
            ProfileRequest::S(SParameters {
                bur_deg_100ft: bur,
                dor_deg_100ft: dor,
                kop_ft: kop,
                d3_ft: d3,
                d4_ft: d4,
                tvd_ft: tvd,
                x4_ft: x4,
            }),
            Discretization::default(),
        ),
        Command::Scenario { file, name } => {
            let chosen = scenario::select(&file, name.as_deref())?;
            (
                chosen.name,
                chosen.description,
                chosen.request,
                chosen.discretization,
            )
        }
    };

    let settings = cli.sampling.apply(base_settings);
    log::debug!("solving '{name}' with {settings:?}");
    let solution = engine::solve(&request, &settings)?;

    if let Some(description) = &description {
        println!("{name}: {description}");
    }
    print_summary(&name, &request, &solution)?;

    if cli.output.print_survey {
        print_stations(solution.survey());
    }

    if let Some(path) = &cli.output.survey_out {
        let writer = export::writer_for_path(path)?;
        survey::write_csv(writer, solution.survey())?;
        log::info!("survey written to {}", path.display());
    }

    if let Some(path) = &cli.output.geometry_out {
        let generated = chrono::Utc::now().to_rfc3339();
        let meta = report::Metadata {
            scenario: &name,
            generated_utc: &generated,
            station_count: solution.survey().len(),
        };
        let mut writer = export::writer_for_path(path)?;
        match &solution {
            ProfileSolution::J { geometry, .. } => report::write_json(&mut *writer, &meta, geometry)?,
            ProfileSolution::S { geometry, .. } => report::write_json(&mut *writer, &meta, geometry)?,
            ProfileSolution::Vertical { .. } => {
                return Err(anyhow::anyhow!(
                    "--geometry-out is not available for vertical profiles; use --survey-out"
                ));
            }
        }
        writer.flush()?;
    }

    Ok(())
}

fn print_summary(
    name: &str,
    request: &ProfileRequest,
    solution: &ProfileSolution,
) -> anyhow::Result<()> {
    if let ProfileRequest::Vertical { sections, .. } = request {
        println!("=== Vertical sections ({name}) ===");
        for interval in vertical::section_intervals(sections)? {
            println!(
                "{:<20} top = {:>10.2} ft, bottom = {:>10.2} ft",
                interval.label, interval.top_ft, interval.bottom_ft
            );
        }
    } else {
        let title = format!("{}-profile geometry ({name})", solution.profile());
        print!("{}", table::render(&title, &solution.quantities()));
    }

    for warning in solution.warnings() {
        eprintln!("warning: {warning}");
    }

    let survey = solution.survey();
    println!(
        "Survey         : {} stations in {} sections, deepest station {:.2} ft",
        survey.len(),
        survey.sections().len(),
        survey.max_depth_ft()
    );
    Ok(())
}

fn print_stations(survey: &Survey) {
    println!("{:>6} {:>12} {:>12} {:>12}  section", "index", "x_ft", "y_ft", "z_ft");
    for (i, p) in survey.iter().enumerate() {
        println!(
            "{:>6} {:>12.2} {:>12.2} {:>12.2}  {}",
            i, p.x, p.y, p.z, p.section
        );
    }
}
