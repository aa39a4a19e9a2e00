//! Startup configuration: where the task database lives.
//!
//! The location is read once at process start from, in priority order:
//!
//! 1. the `--database <PATH>` command-line flag;
//! 2. the `DB_NAME` / `DB_HOST` environment variables, optionally loaded from
//!    a `.env` file in the working directory;
//! 3. the `database` section of `config.json` in the data directory.
//!
//! `DB_NAME` is the database file name (or `:memory:`), `DB_HOST` the
//! directory holding it. SQLite has no accounts, so `DB_USER` and
//! `DB_PASSWORD` are ignored with a warning. Without a database name from
//! any source the process refuses to start.
//!
//! ```json
//! {
//!   "database": { "name": "tasks.db", "host": "/var/lib/tasker" }
//! }
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use crate::msg_warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const MEMORY_DATABASE: &str = ":memory:";
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";

/// Where the task database is opened from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    Memory,
}

impl DatabaseLocation {
    fn from_path(path: &Path) -> Self {
        if path.as_os_str() == MEMORY_DATABASE {
            DatabaseLocation::Memory
        } else {
            DatabaseLocation::File(path.to_path_buf())
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DatabaseConfig {
    /// Database file name, or `:memory:`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Directory containing the database file. Defaults to the data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no database configured: set DB_NAME or pass --database")]
    MissingDatabaseName,

    #[error("database directory {0} does not exist or is not a directory")]
    InvalidHost(PathBuf),

    #[error("cannot prepare data directory {path}: {source}")]
    DataDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Config {
    /// Reads `config.json` from `path`; a missing file yields the default configuration.
    pub fn read_from(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&config_str).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Picks the database location from the flag, the environment lookup and
    /// this configuration, in that order.
    pub fn resolve_database<F>(&self, cli_path: Option<&Path>, env_lookup: F, storage: &DataStorage) -> Result<DatabaseLocation, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = cli_path {
            return Ok(DatabaseLocation::from_path(path));
        }

        let file_config = self.database.clone().unwrap_or_default();
        let name = non_blank(env_lookup(ENV_DB_NAME))
            .or_else(|| non_blank(file_config.name))
            .ok_or(ConfigError::MissingDatabaseName)?;

        if name == MEMORY_DATABASE {
            return Ok(DatabaseLocation::Memory);
        }

        match non_blank(env_lookup(ENV_DB_HOST)).or_else(|| non_blank(file_config.host)) {
            Some(host) => {
                let dir = PathBuf::from(host);
                if !dir.is_dir() {
                    return Err(ConfigError::InvalidHost(dir));
                }
                Ok(DatabaseLocation::File(dir.join(name)))
            }
            None => storage
                .get_path(&name)
                .map(DatabaseLocation::File)
                .map_err(|source| ConfigError::DataDirectory {
                    path: storage.base_path().to_path_buf(),
                    source,
                }),
        }
    }

    /// Loads `.env`, reads `config.json` and resolves the database location
    /// against the real process environment.
    pub fn load(cli_path: Option<&Path>) -> Result<DatabaseLocation, ConfigError> {
        dotenv::dotenv().ok();
        if env::var_os(ENV_DB_USER).is_some() || env::var_os(ENV_DB_PASSWORD).is_some() {
            msg_warning!(Message::CredentialsIgnored);
        }
        let storage = DataStorage::new();
        let config = Self::read_from(&storage.base_path().join(CONFIG_FILE_NAME))?;
        config.resolve_database(cli_path, |key| env::var(key).ok(), &storage)
    }
}
