//! Tether CLI Application
//!
//! Command-line interface for opening and inspecting the shared database.

mod args;
mod cli;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use tether_core::{ConnectionConfig, ConnectionManager};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        busy_timeout_ms,
        no_create_dirs,
        json,
        command,
    } = Args::parse();

    let mut builder = ConnectionConfig::builder()
        .with_database_path(database_file)
        .with_create_parent_dirs(!no_create_dirs);
    if let Some(ms) = busy_timeout_ms {
        builder = builder.with_busy_timeout(Duration::from_millis(ms));
    }
    let config = builder.build().context("Invalid database configuration")?;

    let cli = Cli::new(ConnectionManager::new(config), json);

    info!("Tether started");

    match command.unwrap_or(Commands::Status) {
        Commands::Status => cli.status(),
        Commands::Hold => cli.hold().await,
    }
}
