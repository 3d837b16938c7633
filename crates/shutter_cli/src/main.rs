//! Shutter CLI
//!
//! Runs camera button scenarios headlessly and prints button configs.
//!
//! # Usage
//!
//! ```bash
//! # Run a scenario with the default button
//! shutter run scenarios/hold.json
//!
//! # Custom button config, report written to a file
//! shutter run scenarios/hold.json --config button.toml --report out/report.json
//!
//! # Print the default config as TOML
//! shutter config
//!
//! # Verbose logging
//! RUST_LOG=shutter=trace shutter run scenarios/hold.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shutter_cli::{run_loaded_scenario, Scenario};
use shutter_widgets::ButtonConfig;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Headless driver for the Shutter camera button
#[derive(Parser, Debug)]
#[command(name = "shutter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log widget transitions and animation events
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a JSON scenario against a headless button
    Run {
        /// Scenario file
        #[arg(value_name = "SCENARIO")]
        scenario: PathBuf,

        /// Button configuration (TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Write the JSON report here instead of stdout
        #[arg(short, long, value_name = "FILE")]
        report: Option<PathBuf>,
    },
    /// Print the default button configuration as TOML
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Run {
            scenario,
            config,
            report,
        } => run(&scenario, config.as_deref(), report.as_deref()),
        Command::Config => {
            print!("{}", ButtonConfig::default().to_toml()?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("shutter=debug,shutter_cli=debug,shutter_widgets=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("shutter=info,shutter_cli=info,shutter_widgets=info")
        })
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(scenario_path: &Path, config_path: Option<&Path>, report_path: Option<&Path>) -> Result<ExitCode> {
    let scenario = Scenario::from_path(scenario_path)?;
    let config = match config_path {
        Some(path) => ButtonConfig::load(path)
            .with_context(|| format!("failed to load button config {}", path.display()))?,
        None => ButtonConfig::default(),
    };

    tracing::info!(
        scenario = %scenario_path.display(),
        steps = scenario.steps.len(),
        "running scenario"
    );
    let report = run_loaded_scenario(&scenario, config)?;

    match report_path {
        Some(path) => {
            report.write_to_path(path)?;
            tracing::info!(report = %path.display(), "report written");
        }
        None => report.write_to_writer(&mut std::io::stdout().lock())?,
    }

    Ok(if report.is_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
