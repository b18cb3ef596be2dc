//! Implementation of the `ct path` command.

use std::io::Write;

use anyhow::Result;
use ct_plugin::Config;

/// Writes the path the timings file would be written to.
pub fn run<W: Write>(out: &mut W, config: &Config) -> Result<()> {
    writeln!(out, "{}", config.resolved_output_path().display())?;
    Ok(())
}
