//! # Tasker
//!
//! An interactive command-line task manager. A numbered menu lets the user
//! list, add, delete, complete, filter, search, sort and prioritize tasks,
//! each change being written straight to a SQLite `tasks` table.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasker::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
