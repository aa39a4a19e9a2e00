//! Database layer for tasker.
//!
//! All state lives in one SQLite database holding a single `tasks` table.
//! The process keeps no cache: every listing is read fresh and every change
//! is written immediately.
//!
//! ```rust,no_run
//! use tasker::db::{db::Db, tasks::Tasks};
//! use tasker::libs::config::DatabaseLocation;
//!
//! let db = Db::open(&DatabaseLocation::Memory)?;
//! let mut tasks = Tasks::new(db);
//! tasks.insert("buy milk")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management: opening, parameterized statements, closing.
pub mod db;

/// Versioned schema migrations, applied when the database is opened.
pub mod migrations;

/// The task repository: one operation per menu action.
pub mod tasks;
