//! Opening the underlying SQLite connection.

use std::fs;

use log::debug;
use rusqlite::Connection;

use crate::{
    config::ConnectionConfig,
    error::{ConnectionError, DatabaseResultExt, Result},
};

/// Creates the raw connection a manager hands out.
///
/// The manager calls this once per transition into the open state, so an
/// implementation can count or fail opens without touching the manager.
pub trait Opener: Send + Sync {
    fn open(&self, config: &ConnectionConfig) -> Result<Connection>;
}

/// Opens the configured database file with `rusqlite`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteOpener;

impl Opener for SqliteOpener {
    fn open(&self, config: &ConnectionConfig) -> Result<Connection> {
        let path = config.path();

        if config.create_parent_dirs() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| ConnectionError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        debug!("Opening SQLite database at {}", path.display());
        let connection = Connection::open_with_flags(path, config.open_flags())
            .db_context("Failed to open database connection")?;

        if let Some(timeout) = config.busy_timeout() {
            connection
                .busy_timeout(timeout)
                .db_context("Failed to set busy timeout")?;
        }

        let pragma = if config.foreign_keys() {
            "PRAGMA foreign_keys = ON"
        } else {
            "PRAGMA foreign_keys = OFF"
        };
        connection
            .execute(pragma, [])
            .db_context("Failed to configure foreign keys")?;

        Ok(connection)
    }
}
