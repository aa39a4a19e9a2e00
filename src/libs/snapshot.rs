//! Point-in-time task listings used to turn a displayed number back into a row.
//!
//! The delete, complete and prioritize dialogs show a numbered list and ask
//! the user to pick from it. The numbers are only meaningful for the exact
//! list that was shown, so the list is frozen in a [`Snapshot`] together with
//! the storage version it was read at. Before a write, the repository
//! compares that version with the current one and refuses stale selections.

use super::input::{parse_index, InputError};
use super::task::Task;

/// Storage state a snapshot was taken at.
///
/// `data_version` changes when another connection commits to the database;
/// `local_writes` counts writes made through this process's repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotVersion {
    pub data_version: i64,
    pub local_writes: u64,
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    tasks: Vec<Task>,
    version: SnapshotVersion,
}

impl Snapshot {
    pub fn new(tasks: Vec<Task>, version: SnapshotVersion) -> Self {
        Self { tasks, version }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn version(&self) -> SnapshotVersion {
        self.version
    }

    /// Returns the task displayed at the 1-based position typed by the user.
    pub fn select(&self, input: &str) -> Result<&Task, InputError> {
        let index = parse_index(input, self.tasks.len())?;
        Ok(&self.tasks[index])
    }
}
