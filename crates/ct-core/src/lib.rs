//! Core domain logic for CSV task timings.
//!
//! This crate contains the fundamental types for:
//! - Timestamps: second-resolution UTC times in a fixed text format
//! - Timing table: insertion-ordered start/end records keyed by task name
//! - Lifecycle events and the dispatcher that routes them to a handler

pub mod dispatch;
pub mod event;
pub mod table;
pub mod timestamp;

pub use dispatch::{Dispatcher, LifecycleHandler, RunHook, TaskHook};
pub use event::{LifecycleEvent, TaskEventName, TaskOutcome};
pub use table::{Recorded, TimingEntry, TimingTable};
pub use timestamp::{TIMESTAMP_FORMAT, format_timestamp, now_utc, now_utc_iso8601};
