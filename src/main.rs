//! BettingSimulator - Main Entry Point
//!
//! Loads a simulation from a TOML file (plus BETSIM_ environment overrides),
//! runs every configured strategy and prints a summary per strategy.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use betting_simulator::config::{build_simulation, build_stop_condition, load_config};
use betting_simulator::{RunResults, Statistics};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "simulation.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Override the configured number of rounds
    #[arg(long)]
    rounds: Option<usize>,

    /// Override the configured RNG seed
    #[arg(long, env = "BETSIM_SEED")]
    seed: Option<u64>,

    /// Emit the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Per-strategy line of the report
#[derive(Debug, Serialize)]
struct StrategyReport {
    strategy: String,
    #[serde(flatten)]
    statistics: Statistics,
    expected_value: f64,
    variance_gain: f64,
}

#[derive(Debug, Serialize)]
struct Report {
    generated_at: DateTime<Utc>,
    game: String,
    rounds: usize,
    strategies: Vec<StrategyReport>,
}

impl Report {
    fn new(game: String, rounds: usize, results: &RunResults) -> Self {
        let strategies = results
            .iter()
            .map(|(name, result)| StrategyReport {
                strategy: name.clone(),
                statistics: result.compute_statistics(),
                expected_value: result.history().expected_value(),
                variance_gain: result.history().variance_gain(),
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            game,
            rounds,
            strategies,
        }
    }

    fn print_table(&self) {
        println!("{} | {} rounds | {}", self.game, self.rounds, self.generated_at.to_rfc3339());
        println!(
            "{:<28} {:>7} {:>12} {:>10} {:>10} {:>10} {:>12} {:>8} {:>12}",
            "strategy", "rounds", "final_gain", "avg_bet", "max_bet", "min_bet", "drawdown", "ev", "var_gain"
        );
        for s in &self.strategies {
            println!(
                "{:<28} {:>7} {:>12.2} {:>10.2} {:>10.2} {:>10.2} {:>12.2} {:>8.3} {:>12.2}",
                s.strategy,
                s.statistics.total_rounds,
                s.statistics.final_gain,
                s.statistics.average_bet,
                s.statistics.max_bet,
                s.statistics.min_bet,
                s.statistics.max_drawdown,
                s.expected_value,
                s.variance_gain,
            );
        }
    }
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let mut config = load_config(Some(&args.config))
        .with_context(|| format!("loading configuration from {}", args.config))?;
    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    // Initialize logging
    let level = parse_level(args.log_level.as_deref().unwrap_or(&config.settings.log_level));

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting BettingSimulator");
    info!("Configuration file: {}", args.config);

    let mut simulation = build_simulation(&config)?;
    let stop = build_stop_condition(&config.stop);
    let results = match &stop {
        Some(condition) => simulation.run(config.rounds, Some(&**condition))?,
        None => simulation.run(config.rounds, None)?,
    };
    let report = Report::new(simulation.game().title().to_string(), config.rounds, &results);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print_table();
    }

    info!("Simulation complete");
    Ok(())
}
