//! The timing recorder: lifecycle events in, one CSV file out.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use ct_core::{LifecycleHandler, Recorded, TimingTable, now_utc};
use ct_csv::CsvError;

use crate::config::Config;

/// Name the recorder is registered under.
pub const PLUGIN_NAME: &str = "csv_timings";

/// Errors raised while finishing a run.
#[derive(Debug, Error)]
pub enum RecorderError {
    /// The timings file could not be written.
    #[error(transparent)]
    Output(#[from] CsvError),
    /// The file was written but the confirmation could not be shown.
    #[error("failed to write confirmation message")]
    Console(#[source] io::Error),
}

/// Records start and end times per task and writes them when the run ends.
///
/// Task names are the table key, so repeated names (loops, includes) share a
/// row and the latest events win. Finishing the run replaces any file already
/// at the output path and prints one confirmation line to the console sink.
pub struct TimingRecorder<W = io::Stdout> {
    table: TimingTable,
    output_path: PathBuf,
    console: W,
}

impl TimingRecorder {
    /// Creates a recorder that confirms to stdout.
    pub fn new(config: &Config) -> Self {
        Self::with_console(config, io::stdout())
    }

    /// Creates a recorder configured from the environment.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn from_env() -> Result<Self, figment::Error> {
        Ok(Self::new(&Config::load()?))
    }
}

impl<W: Write> TimingRecorder<W> {
    /// Creates a recorder that confirms to `console`.
    pub fn with_console(config: &Config, console: W) -> Self {
        let output_path = config.resolved_output_path();
        tracing::debug!(path = %output_path.display(), "timing recorder ready");
        Self {
            table: TimingTable::new(),
            output_path,
            console,
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub const fn table(&self) -> &TimingTable {
        &self.table
    }

    pub fn into_console(self) -> W {
        self.console
    }
}

impl<W: Write> LifecycleHandler for TimingRecorder<W> {
    type Error = RecorderError;

    fn on_task_start(&mut self, task: &str) {
        match self.table.record_start(task, now_utc()) {
            Recorded::Inserted => tracing::debug!(task, "task started"),
            Recorded::Updated => {
                tracing::debug!(task, "task started again, overwriting previous timing");
            }
        }
    }

    fn on_task_end(&mut self, task: &str) {
        match self.table.record_end(task, now_utc()) {
            Recorded::Updated => tracing::debug!(task, "task finished"),
            Recorded::Inserted => {
                tracing::warn!(task, "task finished without a recorded start");
            }
        }
    }

    fn on_run_end(&mut self) -> Result<(), RecorderError> {
        ct_csv::write_table(&self.output_path, &self.table)?;

        writeln!(
            self.console,
            "CSV timing written to {}",
            self.output_path.display()
        )
        .map_err(RecorderError::Console)?;

        tracing::info!(
            plugin = PLUGIN_NAME,
            path = %self.output_path.display(),
            tasks = self.table.len(),
            "run finished"
        );
        Ok(())
    }
}
