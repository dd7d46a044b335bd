use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs;
use std::path::{Path, PathBuf};

use fitstat::config::{AppConfig, SummaryFormat};
use fitstat::error::FitstatError;
use fitstat::models::SensorPacket;
use fitstat::report;
use fitstat::{init_logging, LogFormat, WorkoutFactory, WorkoutKind, WorkoutSummary};

/// fitstat - Fitness Tracker Statistics CLI
///
/// Computes distance, mean speed and calories burned from raw sensor
/// readings for running, walking and swimming workouts.
#[derive(Parser)]
#[command(name = "fitstat")]
#[command(author = "fitstat Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Fitness tracker statistics CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format (pretty, json, compact)
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference sensor packets through the calculator
    Demo {
        /// JSON file with sensor packets (built-in set if omitted)
        #[arg(short, long, value_name = "FILE")]
        packets: Option<PathBuf>,

        /// Render one table instead of one line per workout
        #[arg(short, long)]
        table: bool,
    },

    /// Calculate statistics for a single sensor packet
    Calc {
        /// Workout type code (RUN, WLK or SWM)
        code: String,

        /// Sensor fields in constructor order
        #[arg(required = true)]
        data: Vec<Decimal>,
    },

    /// List supported workout codes
    Codes,

    /// Show the active configuration
    Config {
        /// Write a default config file and exit
        #[arg(long)]
        init: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        report_error(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_format)?;

    if matches!(cli.command, Commands::Config { init: true }) {
        let path = cli
            .config
            .or_else(AppConfig::default_path)
            .context("no config directory available")?;
        AppConfig::default().save(&path)?;
        println!("{} {}", "✓ Wrote default config to".green(), path.display());
        return Ok(());
    }

    let config = AppConfig::load_or_default(cli.config.as_deref())?;
    if !config.display.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Demo { packets, table } => {
            let packets = match packets {
                Some(path) => read_packets(&path)?,
                None => demo_packets(),
            };
            println!("{}", "Workout statistics".cyan().bold());
            let summaries = summarize_packets(&packets)?;
            let as_table = table || config.display.format == SummaryFormat::Table;
            if as_table {
                println!("{}", report::summary_table(&summaries));
            } else {
                for summary in &summaries {
                    println!("{}", summary);
                }
            }
        }

        Commands::Calc { code, data } => {
            let summary = WorkoutFactory::create(&code, &data)
                .map_err(FitstatError::from)?
                .summarize()
                .map_err(FitstatError::from)?;
            println!("{}", summary);
        }

        Commands::Codes => {
            println!("{}", "Supported workout codes".cyan().bold());
            for kind in WorkoutKind::ALL {
                println!(
                    "  {}  {:<10} {} sensor fields",
                    kind.code().bold(),
                    kind.name(),
                    kind.field_count()
                );
            }
        }

        Commands::Config { .. } => {
            println!("{}", "Active configuration".cyan().bold());
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn summarize_packets(packets: &[SensorPacket]) -> Result<Vec<WorkoutSummary>> {
    packets
        .iter()
        .map(|packet| {
            let summary = WorkoutFactory::from_packet(packet)
                .map_err(FitstatError::from)?
                .summarize()
                .map_err(FitstatError::from)?;
            Ok(summary)
        })
        .collect()
}

fn read_packets(path: &Path) -> Result<Vec<SensorPacket>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read packet file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse packet file: {}", path.display()))
}

/// The original tracker's reference packets
fn demo_packets() -> Vec<SensorPacket> {
    vec![
        SensorPacket::new("SWM", vec![dec!(720), dec!(1), dec!(80), dec!(25), dec!(40)]),
        SensorPacket::new("RUN", vec![dec!(15000), dec!(1), dec!(75)]),
        SensorPacket::new("WLK", vec![dec!(9000), dec!(1), dec!(75), dec!(180)]),
    ]
}

fn report_error(err: &anyhow::Error) {
    if let Some(fit) = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<FitstatError>())
    {
        let level = fit.severity().to_tracing_level();
        if level == tracing::Level::ERROR {
            tracing::error!(error = %fit, "command failed");
        } else if level == tracing::Level::WARN {
            tracing::warn!(error = %fit, "command failed");
        } else {
            tracing::info!(error = %fit, "command failed");
        }
        eprintln!("{} {}", "error:".red().bold(), fit.user_message());
    } else {
        eprintln!("{} {:#}", "error:".red().bold(), err);
    }
}
