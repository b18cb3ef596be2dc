//! CLI subcommand implementations.

pub mod path;
pub mod replay;
