//! Command-line entry point: list the catalog or run pattern demos.
//!
//! ```bash
//! catalog list
//! catalog run builder prototype
//! catalog --no-color run --all
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use design_patterns::config::CONFIG_ENV_VAR;
use design_patterns::{catalog, logging, CatalogConfig};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Browse and run design pattern demos.
#[derive(Parser)]
#[command(name = "catalog", version, about, long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Print section headers without color.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every pattern by category.
    #[command(alias = "ls")]
    List,

    /// Run one or more pattern demos.
    Run {
        /// Pattern names, as shown by `catalog list`.
        #[arg(required_unless_present = "all")]
        patterns: Vec<String>,

        /// Run every demo in catalog order.
        #[arg(long, conflicts_with = "patterns")]
        all: bool,
    },
}

fn execute(cli: Cli) -> design_patterns::Result<()> {
    let mut config = CatalogConfig::load(cli.config.as_deref())?;
    if cli.no_color {
        config.color = false;
    }

    if let Err(err) = logging::init_tracing(&config.log_filter) {
        eprintln!("Warning: tracing not initialized: {err}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::List => catalog::list(&config, &mut out)?,
        Command::Run { all: true, .. } => catalog::run_all(&config, &mut out)?,
        Command::Run { patterns, .. } => catalog::run(patterns.as_slice(), &config, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    match execute(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
