use super::db::Db;
use crate::libs::snapshot::{Snapshot, SnapshotVersion};
use crate::libs::task::{Keyword, Priority, SortField, Status, Task, TaskFilter};
use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Row};

const TASK_COLUMNS: &str = "id, description, status, created_at, updated_at, priority";
const INSERT_TASK: &str = "INSERT INTO tasks (description, status, created_at, updated_at, priority) VALUES (?1, ?2, ?3, ?3, ?4)";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?1, updated_at = ?2 WHERE id = ?3";
const UPDATE_PRIORITY: &str = "UPDATE tasks SET priority = ?1, updated_at = ?2 WHERE id = ?3";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// Repository over the `tasks` table.
///
/// Owns the database connection for the lifetime of the session. Writes do
/// not check how many rows they touched: updating or deleting an id that no
/// longer exists succeeds without effect.
pub struct Tasks {
    db: Db,
    local_writes: u64,
}

impl Tasks {
    pub fn new(db: Db) -> Self {
        Tasks { db, local_writes: 0 }
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        match filter {
            TaskFilter::All => self.db.query(&format!("SELECT {} FROM tasks ORDER BY id", TASK_COLUMNS), [], map_task),
            TaskFilter::ByStatus(status) => self.db.query(
                &format!("SELECT {} FROM tasks WHERE status = ?1 ORDER BY id", TASK_COLUMNS),
                params![status],
                map_task,
            ),
            // SQLite's LIKE only folds ASCII case, so matching happens on this side.
            TaskFilter::Search(keyword) => {
                let tasks = self.fetch(TaskFilter::All)?;
                Ok(tasks.into_iter().filter(|task| keyword.matches(&task.description)).collect())
            }
            // The column name comes from a closed enum, never from user input.
            TaskFilter::Sorted(field) => self.db.query(
                &format!("SELECT {} FROM tasks ORDER BY {} ASC, id ASC", TASK_COLUMNS, field.column()),
                [],
                map_task,
            ),
        }
    }

    pub fn list_all(&mut self) -> Result<Vec<Task>> {
        self.fetch(TaskFilter::All)
    }

    pub fn list_by_status(&mut self, status: Status) -> Result<Vec<Task>> {
        self.fetch(TaskFilter::ByStatus(status))
    }

    /// Tasks whose description contains `keyword`, ignoring case.
    pub fn search(&mut self, keyword: &Keyword) -> Result<Vec<Task>> {
        self.fetch(TaskFilter::Search(keyword.clone()))
    }

    pub fn list_sorted(&mut self, field: SortField) -> Result<Vec<Task>> {
        self.fetch(TaskFilter::Sorted(field))
    }

    /// Adds a to-do task with low priority and returns its id.
    pub fn insert(&mut self, description: &str) -> Result<i64> {
        let now = Utc::now();
        self.db.execute(INSERT_TASK, params![description, Status::Todo, now, Priority::Low])?;
        self.local_writes += 1;

        Ok(self.db.conn.last_insert_rowid())
    }

    pub fn mark_complete(&mut self, id: i64) -> Result<usize> {
        let affected = self.db.execute(UPDATE_STATUS, params![Status::Done, Utc::now(), id])?;
        self.local_writes += 1;

        Ok(affected)
    }

    pub fn set_priority(&mut self, id: i64, priority: Priority) -> Result<usize> {
        let affected = self.db.execute(UPDATE_PRIORITY, params![priority, Utc::now(), id])?;
        self.local_writes += 1;

        Ok(affected)
    }

    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let affected = self.db.execute(DELETE_TASK, params![id])?;
        self.local_writes += 1;

        Ok(affected)
    }

    /// Fetches every task, frozen together with the current storage version.
    pub fn snapshot(&mut self) -> Result<Snapshot> {
        let version = self.version()?;
        let tasks = self.list_all()?;

        Ok(Snapshot::new(tasks, version))
    }

    /// Whether nothing was written since `snapshot` was taken.
    pub fn is_current(&self, snapshot: &Snapshot) -> Result<bool> {
        Ok(self.version()? == snapshot.version())
    }

    fn version(&self) -> Result<SnapshotVersion> {
        Ok(SnapshotVersion {
            data_version: self.db.data_version()?,
            local_writes: self.local_writes,
        })
    }

    pub fn close(self) -> Result<()> {
        self.db.close()
    }
}

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        status: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
        priority: row.get(5)?,
    })
}
