//! Error types for connection lifecycle operations.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every connection manager operation.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// Opening, configuring or closing the SQLite connection failed
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The handle was closed by the manager and can no longer be used
    #[error("Connection handle {id} is closed")]
    Closed { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid configuration values
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// A process-wide manager was already installed
    #[error("A global connection manager is already installed")]
    AlreadyInstalled,
}

/// Builder for creating database errors with context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> ConnectionError {
        ConnectionError::Database {
            message: self.message,
            source,
        }
    }
}

impl ConnectionError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates an input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the underlying SQLite error, if this is a database failure.
    pub fn sqlite_error(&self) -> Option<&rusqlite::Error> {
        match self {
            Self::Database { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ConnectionError::database(message).with_source(e))
    }
}

/// Result type alias for connection operations
pub type Result<T> = std::result::Result<T, ConnectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_context_wraps_sqlite_error() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::InvalidQuery);
        let err = result.db_context("Failed to open").unwrap_err();

        assert_eq!(err.to_string(), "Database error: Failed to open");
        assert!(matches!(
            err.sqlite_error(),
            Some(rusqlite::Error::InvalidQuery)
        ));
    }

    #[test]
    fn test_closed_message_names_handle() {
        let err = ConnectionError::Closed { id: 7 };
        assert_eq!(err.to_string(), "Connection handle 7 is closed");
        assert!(err.sqlite_error().is_none());
    }
}
