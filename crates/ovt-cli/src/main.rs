//! # ovt CLI entry point
//!
//! Parses arguments, initializes tracing and dispatches to
//! [`ovt_cli::generate::run_generate`].

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ovt_cli::config::ToolConfig;
use ovt_cli::console::Console;
use ovt_cli::generate::{run_generate, GenerateArgs};

/// OpenOOH venue taxonomy documentation generator.
///
/// Validates `specification/<VERSION>/specification.json`, generates
/// `specification.md` from it, and optionally promotes the version to the
/// current specification.
#[derive(Parser, Debug)]
#[command(name = "ovt", version, about, long_about = None)]
struct Cli {
    /// Enable verbose diagnostics on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(flatten)]
    args: GenerateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("ovt v{} starting", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    let config = match &cli.config {
        Some(path) => ToolConfig::load(path)?,
        None => ToolConfig::default(),
    };
    let cwd = std::env::current_dir()?;
    let mut console = Console::stdio();
    run_generate(&cli.args, &config, &cwd, &mut console)
}
