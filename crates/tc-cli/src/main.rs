use std::io;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tc_cli::commands::{dry, scan};
use tc_cli::{Cli, Commands, Config};
use tc_core::DryingTracker;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr; stdout carries command output and prompts
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    match &cli.command {
        Some(Commands::Scan { path, json }) => {
            let path = path.as_deref().unwrap_or(config.scan_path.as_path());
            scan::run(&mut io::stdout().lock(), path, *json)?;
        }
        Some(Commands::Dry { radii }) => {
            let mut tracker = DryingTracker::new(config.object_prefix.as_str());
            for &radius in radii {
                tracker
                    .add(radius, Utc::now())
                    .with_context(|| format!("cannot track radius {radius}"))?;
            }
            dry::run(io::stdin().lock(), &mut io::stdout().lock(), &mut tracker, Utc::now)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
