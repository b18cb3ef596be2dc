//! Replay host for the CSV task timings recorder.
//!
//! This crate provides the `ct` command, which stands in for an automation
//! engine by feeding recorded lifecycle events to a timing recorder.

mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
