pub mod actions;
pub mod menu;
pub mod migrations;

use crate::libs::config::Config;
use crate::libs::logging::init_tracing;
use crate::libs::messages::Message;
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Inspect the database schema version")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file to use, or `:memory:`; overrides DB_NAME and DB_HOST
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        init_tracing(cli.debug);

        let location = Config::load(cli.database.as_deref()).map_err(|e| anyhow!(Message::ConfigLoadFailed(e.to_string())))?;
        tracing::debug!(?location, "database location resolved");

        match cli.command {
            Some(Commands::Migrations(args)) => migrations::cmd(args, &location),
            None => menu::cmd(&location).await,
        }
    }
}
