//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Time code utilities.
///
/// Averages the `hh:mm` times found in a log file and tracks drying
/// countdowns for painted objects.
#[derive(Debug, Parser)]
#[command(name = "tc", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Average the hh:mm time codes found in a text file.
    Scan {
        /// File to scan. Defaults to the configured `scan_path`.
        path: Option<PathBuf>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Track drying objects from an interactive menu.
    Dry {
        /// Start tracking a sphere of this radius before the menu opens.
        #[arg(long = "radius", value_name = "RADIUS", allow_negative_numbers = true)]
        radii: Vec<f64>,
    },
}
