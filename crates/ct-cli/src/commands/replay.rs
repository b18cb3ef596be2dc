//! Implementation of the `ct replay` command.
//!
//! Reads lifecycle events as JSONL, one object per line, and delivers them to
//! a dispatcher in order:
//!
//! ```text
//! {"event":"task_started","task":"Install packages"}
//! {"event":"task_finished","task":"Install packages","outcome":"ok"}
//! {"event":"run_finished"}
//! ```
//!
//! Reading stops at the first `run_finished`. A stream that ends before it is
//! treated as an aborted run: nothing is written.

use std::io::BufRead;

use anyhow::{Context, Result};
use ct_core::{Dispatcher, LifecycleEvent, LifecycleHandler};

/// Counts from one replay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    /// Events delivered to the dispatcher.
    pub events: usize,
    /// Lines skipped because they did not parse as an event.
    pub malformed: usize,
    /// Whether the stream reached `run_finished`.
    pub finished: bool,
}

/// Replays every event in `input` through `dispatcher`.
pub fn run<R, H>(input: R, dispatcher: &mut Dispatcher<H>) -> Result<ReplayStats>
where
    R: BufRead,
    H: LifecycleHandler,
    H::Error: std::error::Error + Send + Sync + 'static,
{
    let mut stats = ReplayStats::default();

    for (line_num, line) in input.lines().enumerate() {
        let line = line.context("failed to read event stream")?;
        if line.trim().is_empty() {
            continue;
        }

        let event: LifecycleEvent = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(
                    line = line_num + 1,
                    error = %e,
                    "skipping malformed event"
                );
                stats.malformed += 1;
                continue;
            }
        };

        dispatcher
            .dispatch(&event)
            .context("failed to write task timings")?;
        stats.events += 1;

        if event == LifecycleEvent::RunFinished {
            stats.finished = true;
            break;
        }
    }

    if !stats.finished {
        tracing::warn!(
            events = stats.events,
            "event stream ended before the run finished, no timings written"
        );
    }

    Ok(stats)
}
