//! Task timing recorder.
//!
//! A [`TimingRecorder`] implements [`ct_core::LifecycleHandler`]. A host
//! builds one, registers it with a [`ct_core::Dispatcher`], and feeds it task
//! lifecycle events. When the run finishes the recorder writes every task's
//! start and end time to a CSV file chosen by `ANSIBLE_CSV_PATH`.

mod config;
mod recorder;

pub use config::{Config, DEFAULT_OUTPUT_FILE, OUTPUT_PATH_ENV, expand_home};
pub use recorder::{PLUGIN_NAME, RecorderError, TimingRecorder};
