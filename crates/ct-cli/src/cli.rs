//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CSV task timings.
///
/// Records when each task of an automation run started and finished, and
/// writes the result as CSV once the run is over.
#[derive(Debug, Parser)]
#[command(name = "ct", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay a JSONL stream of lifecycle events and write the timings file.
    Replay {
        /// File to read events from. Reads stdin when omitted.
        file: Option<PathBuf>,
    },

    /// Print the resolved output path.
    Path,
}
