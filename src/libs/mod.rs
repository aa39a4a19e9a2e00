//! Core library modules for tasker.
//!
//! - **Domain**: task records, user input parsing, selection snapshots
//! - **Infrastructure**: configuration, data directory, logging
//! - **Interface**: console device, message catalogue, line rendering

pub mod config;
pub mod console;
pub mod data_storage;
pub mod input;
pub mod logging;
pub mod messages;
pub mod snapshot;
pub mod task;
pub mod view;
