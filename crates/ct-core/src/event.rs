//! Task lifecycle notifications delivered by the automation engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a task finished. Only used for routing; timing ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskOutcome {
    #[default]
    Ok,
    Failed,
    Skipped,
}

/// A lifecycle notification.
///
/// Serialized as a tagged object, e.g. `{"event":"task_started","task":"A"}`.
/// Fields an engine adds beyond these (such as `host`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LifecycleEvent {
    TaskStarted {
        task: String,
    },
    TaskFinished {
        task: String,
        #[serde(default)]
        outcome: TaskOutcome,
    },
    RunFinished,
}

impl LifecycleEvent {
    /// The subscription name and task for per-task events, `None` for run
    /// completion.
    pub fn task_event(&self) -> Option<(TaskEventName, &str)> {
        match self {
            Self::TaskStarted { task } => Some((TaskEventName::Start, task.as_str())),
            Self::TaskFinished { task, outcome } => {
                Some((TaskEventName::from_outcome(*outcome), task.as_str()))
            }
            Self::RunFinished => None,
        }
    }
}

/// Names that per-task handlers subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskEventName {
    Start,
    Ok,
    Failed,
    Skipped,
}

impl TaskEventName {
    pub const fn from_outcome(outcome: TaskOutcome) -> Self {
        match outcome {
            TaskOutcome::Ok => Self::Ok,
            TaskOutcome::Failed => Self::Failed,
            TaskOutcome::Skipped => Self::Skipped,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "task_start",
            Self::Ok => "task_ok",
            Self::Failed => "task_failed",
            Self::Skipped => "task_skipped",
        }
    }
}

impl fmt::Display for TaskEventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
