//! Builder for connection configuration.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use rusqlite::OpenFlags;

use crate::error::{ConnectionError, Result};

/// Database file used when no path is configured.
pub const DEFAULT_DATABASE_PATH: &str = "database.db";

/// Settings applied every time the manager opens its connection.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    path: PathBuf,
    open_flags: OpenFlags,
    busy_timeout: Option<Duration>,
    foreign_keys: bool,
    create_parent_dirs: bool,
}

impl ConnectionConfig {
    /// Starts a builder with default settings.
    pub fn builder() -> ConnectionConfigBuilder {
        ConnectionConfigBuilder::new()
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn open_flags(&self) -> OpenFlags {
        self.open_flags
    }

    pub fn busy_timeout(&self) -> Option<Duration> {
        self.busy_timeout
    }

    pub fn foreign_keys(&self) -> bool {
        self.foreign_keys
    }

    pub fn create_parent_dirs(&self) -> bool {
        self.create_parent_dirs
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATABASE_PATH),
            open_flags: OpenFlags::default(),
            busy_timeout: None,
            foreign_keys: true,
            create_parent_dirs: true,
        }
    }
}

/// Builder for creating and validating [`ConnectionConfig`] instances.
#[derive(Debug, Clone, Default)]
pub struct ConnectionConfigBuilder {
    config: ConnectionConfig,
}

impl ConnectionConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, `database.db` in the current working directory is
    /// used.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config.path = path.as_ref().to_path_buf();
        }
        self
    }

    /// Sets the SQLite open flags. Defaults to read/write/create.
    pub fn with_open_flags(mut self, flags: OpenFlags) -> Self {
        self.config.open_flags = flags;
        self
    }

    /// Sets how long SQLite waits on a locked database before failing.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.config.busy_timeout = Some(timeout);
        self
    }

    /// Enables or disables foreign key enforcement on the connection.
    pub fn with_foreign_keys(mut self, enabled: bool) -> Self {
        self.config.foreign_keys = enabled;
        self
    }

    /// Controls whether missing parent directories are created before
    /// opening.
    pub fn with_create_parent_dirs(mut self, enabled: bool) -> Self {
        self.config.create_parent_dirs = enabled;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError::InvalidInput` if the database path is empty
    pub fn build(self) -> Result<ConnectionConfig> {
        if self.config.path.as_os_str().is_empty() {
            return Err(ConnectionError::invalid_input(
                "database_path",
                "Database path cannot be empty",
            ));
        }
        Ok(self.config)
    }
}
