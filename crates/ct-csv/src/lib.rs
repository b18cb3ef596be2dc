//! CSV output for task timings.
//!
//! # Format
//!
//! One header row `task,start,end`, then one row per task in first-seen
//! order. Timestamps use [`ct_core::TIMESTAMP_FORMAT`]; a missing start or end
//! is written as an empty field. Fields are quoted only when they contain the
//! delimiter, a quote or a line break. Rows end with `\n`.
//!
//! Writing replaces any existing file at the target path. There is no
//! protection against a partially written file beyond what the filesystem
//! provides.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use thiserror::Error;

use ct_core::{TimingEntry, TimingTable, format_timestamp};

/// Column names, in output order.
pub const HEADER: [&str; 3] = ["task", "start", "end"];

/// Errors writing the timings file.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The output directory could not be created.
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The output file could not be created or truncated.
    #[error("failed to open {} for writing", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing rows to the output file failed.
    #[error("failed to write timings to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Serialize)]
struct Row<'a> {
    task: &'a str,
    start: String,
    end: String,
}

impl<'a> From<&'a TimingEntry> for Row<'a> {
    fn from(entry: &'a TimingEntry) -> Self {
        Self {
            task: &entry.task,
            start: entry.start.map(format_timestamp).unwrap_or_default(),
            end: entry.end.map(format_timestamp).unwrap_or_default(),
        }
    }
}

/// Writes `table` as CSV to any writer.
pub fn write_to<W: io::Write>(out: W, table: &TimingTable) -> csv::Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(HEADER)?;
    for entry in table {
        writer.serialize(Row::from(entry))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `table` to `path`, creating parent directories as needed.
///
/// Any existing file at `path` is replaced.
pub fn write_table(path: &Path, table: &TimingTable) -> Result<(), CsvError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CsvError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let file = File::create(path).map_err(|source| CsvError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    write_to(file, table).map_err(|source| CsvError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), rows = table.len(), "wrote timings");
    Ok(())
}
