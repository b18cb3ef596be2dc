//! In-memory timing table keyed by task name.
//!
//! # Duplicate task names
//!
//! Task names are used as keys even though an engine may reuse a name across
//! loop iterations or included task files. A later event for the same name
//! overwrites the earlier timing rather than adding a second row. Row order is
//! fixed by the first time a name was seen.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Start and end times recorded for one task name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingEntry {
    pub task: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl TimingEntry {
    fn new(task: String) -> Self {
        Self {
            task,
            start: None,
            end: None,
        }
    }

    /// Whether both a start and an end have been recorded.
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Whether a record call created a new entry or touched an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recorded {
    Inserted,
    Updated,
}

/// Insertion-ordered mapping from task name to [`TimingEntry`].
#[derive(Debug, Default, Clone)]
pub struct TimingTable {
    entries: Vec<TimingEntry>,
    index: HashMap<String, usize>,
}

impl TimingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a task start.
    ///
    /// Restarting a known task overwrites its start and clears any end, so a
    /// finished task is never reported with a stale end time.
    pub fn record_start(&mut self, task: &str, at: DateTime<Utc>) -> Recorded {
        let (entry, recorded) = self.entry_mut(task);
        entry.start = Some(at);
        entry.end = None;
        recorded
    }

    /// Records a task end.
    ///
    /// An end with no matching start still produces an entry, with an empty
    /// start.
    pub fn record_end(&mut self, task: &str, at: DateTime<Utc>) -> Recorded {
        let (entry, recorded) = self.entry_mut(task);
        entry.end = Some(at);
        recorded
    }

    pub fn get(&self, task: &str) -> Option<&TimingEntry> {
        self.index.get(task).map(|&i| &self.entries[i])
    }

    /// Iterates entries in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimingEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, task: &str) -> (&mut TimingEntry, Recorded) {
        if let Some(&i) = self.index.get(task) {
            return (&mut self.entries[i], Recorded::Updated);
        }
        let i = self.entries.len();
        self.index.insert(task.to_string(), i);
        self.entries.push(TimingEntry::new(task.to_string()));
        (&mut self.entries[i], Recorded::Inserted)
    }
}

impl<'a> IntoIterator for &'a TimingTable {
    type Item = &'a TimingEntry;
    type IntoIter = std::slice::Iter<'a, TimingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
