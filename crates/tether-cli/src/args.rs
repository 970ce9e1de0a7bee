use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Open, inspect and close the shared SQLite database
///
/// Tether manages a single lazily opened connection to a local SQLite file.
/// This tool opens that connection, reports its status, and closes it again
/// on exit or on Ctrl-C.
#[derive(Parser)]
#[command(version, about, name = "tether")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to ./database.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Milliseconds SQLite waits on a locked database before failing
    #[arg(long, global = true)]
    pub busy_timeout_ms: Option<u64>,

    /// Do not create missing parent directories of the database file
    #[arg(long, global = true)]
    pub no_create_dirs: bool,

    /// Print status as JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tether CLI
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Open the database, print its status and close it
    #[command(alias = "s")]
    Status,
    /// Open the database and keep it open until Ctrl-C
    Hold,
}
