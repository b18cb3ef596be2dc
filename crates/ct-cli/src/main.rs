use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ct_cli::commands::{path, replay};
use ct_cli::{Cli, Commands};
use ct_core::Dispatcher;
use ct_plugin::{Config, TimingRecorder};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout carries only command output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load().context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    match &cli.command {
        Some(Commands::Replay { file }) => {
            let mut dispatcher = Dispatcher::with_default_routes(TimingRecorder::new(&config));
            let stats = match file {
                Some(file) => {
                    let input = File::open(file)
                        .with_context(|| format!("failed to open {}", file.display()))?;
                    replay::run(BufReader::new(input), &mut dispatcher)?
                }
                None => replay::run(io::stdin().lock(), &mut dispatcher)?,
            };
            tracing::debug!(
                events = stats.events,
                malformed = stats.malformed,
                finished = stats.finished,
                tasks = dispatcher.handler().table().len(),
                "replay complete"
            );
        }
        Some(Commands::Path) => {
            path::run(&mut io::stdout().lock(), &config)?;
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
