//! AirGuard - fuzzy air-quality assessment
//!
//! Command-line interface: one-shot assessment of four readings, batch
//! assessment of a record file, or the interactive menu.

mod menu;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, warn, LevelFilter};
use serde::Serialize;

use airguard_core::{EngineConfig, InputPolicy, Model, QualityAssessment, Readings};
use airguard_records::{Criteria, EnvironmentalSample, RecordReader};

use menu::{summary, Menu};

#[derive(Parser)]
#[command(name = "airguard")]
#[command(version)]
#[command(about = "Assess environmental air quality with fuzzy inference", long_about = None)]
struct Cli {
    /// Engine configuration file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Assess one set of readings
    Assess {
        /// PM2.5 concentration (ug/m3)
        #[arg(long, allow_negative_numbers = true)]
        pm25: f64,

        /// Wind speed (m/s)
        #[arg(long, allow_negative_numbers = true)]
        wind: f64,

        /// Air temperature (degrees Celsius)
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,

        /// Relative humidity (%)
        #[arg(long, allow_negative_numbers = true)]
        humidity: f64,

        /// Print the assessment as JSON
        #[arg(long)]
        json: bool,
    },

    /// Assess every record of a CSV or JSON Lines file
    Records {
        /// Record file
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Keep only records from this zone
        #[arg(long)]
        zone: Option<String>,

        /// Keep only records from this season
        #[arg(long)]
        season: Option<String>,

        /// Keep only records from this time of day
        #[arg(long)]
        time_of_day: Option<String>,

        /// Print one JSON object per record
        #[arg(long)]
        json: bool,
    },

    /// Interactive menu (default)
    Interactive {
        /// Database used by the database mode
        #[arg(long, value_name = "FILE", default_value = "data/data.csv")]
        database: PathBuf,
    },
}

/// One line of `records --json` output
#[derive(Serialize)]
struct RecordReport<'a> {
    #[serde(flatten)]
    sample: &'a EnvironmentalSample,
    assessment: Option<QualityAssessment>,
    error: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    debug!("Engine configuration: {:?}", config);

    let model = Model::with_config(config).context("Failed to build the fuzzy model")?;

    match cli.command.unwrap_or(Command::Interactive {
        database: PathBuf::from("data/data.csv"),
    }) {
        Command::Assess {
            pm25,
            wind,
            temperature,
            humidity,
            json,
        } => assess(&model, Readings::new(pm25, wind, temperature, humidity), json),
        Command::Records {
            path,
            zone,
            season,
            time_of_day,
            json,
        } => {
            let mut criteria = Criteria::new();
            if let Some(zone) = zone {
                criteria = criteria.zone(zone);
            }
            if let Some(season) = season {
                criteria = criteria.season(season);
            }
            if let Some(time_of_day) = time_of_day {
                criteria = criteria.time_of_day(time_of_day);
            }
            records(&model, &path, &criteria, json)
        }
        Command::Interactive { database } => {
            let stdin = io::stdin();
            Menu::new(&model, database, stdin.lock(), io::stdout()).run()
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Warn about readings the model will extrapolate beyond its universes
pub(crate) fn warn_outside_universe(model: &Model, readings: &Readings) {
    if model.config().input_policy != InputPolicy::Extrapolate {
        return;
    }
    for variable in model.outside_universe(readings) {
        let universe = model.input_universe(variable);
        warn!(
            "{} reading {} is outside [{}, {}]; membership is extrapolated",
            variable,
            readings.get(variable),
            universe.min(),
            universe.max()
        );
    }
}

fn assess(model: &Model, readings: Readings, json: bool) -> Result<()> {
    warn_outside_universe(model, &readings);
    let assessment = model
        .assess(&readings)
        .with_context(|| format!("Cannot assess {:?}", readings))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!("{}", summary(&assessment));
    }
    Ok(())
}

fn records(model: &Model, path: &Path, criteria: &Criteria, json: bool) -> Result<()> {
    let reader = RecordReader::open(path)
        .with_context(|| format!("Failed to open record file: {}", path.display()))?;
    let (samples, stats) = reader.read_all()?;
    debug!("Read {:?}", stats);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut matched = 0usize;

    for sample in criteria.filter(&samples) {
        matched += 1;
        warn_outside_universe(model, &sample.to_readings());
        let result = sample.evaluate(model);

        if json {
            let report = match result {
                Ok(assessment) => RecordReport {
                    sample,
                    assessment: Some(assessment),
                    error: None,
                },
                Err(err) => RecordReport {
                    sample,
                    assessment: None,
                    error: Some(err.to_string()),
                },
            };
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            match result {
                Ok(assessment) => writeln!(
                    out,
                    "{} / {} / {}: {}",
                    sample.zone,
                    sample.season,
                    sample.time_of_day,
                    summary(&assessment)
                )?,
                Err(err) => writeln!(
                    out,
                    "{} / {} / {}: {}",
                    sample.zone, sample.season, sample.time_of_day, err
                )?,
            }
        }
    }

    if !json {
        eprintln!(
            "{} of {} records matched ({} rows rejected)",
            matched, stats.records_read, stats.parse_errors
        );
    }
    Ok(())
}
