//! Shared handle to the manager's open connection.

use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, MutexGuard, PoisonError,
    },
};

use jiff::Timestamp;
use rusqlite::Connection;

use crate::error::{ConnectionError, DatabaseResultExt, Result};

/// A live link to the database file, shared by every caller of
/// [`crate::ConnectionManager::get_connection`].
///
/// Once the manager closes the handle, every clone of the `Arc` observes
/// `is_open() == false` and access returns [`ConnectionError::Closed`].
#[derive(Debug)]
pub struct ConnectionHandle {
    id: u64,
    path: PathBuf,
    opened_at: Timestamp,
    /// Cleared once the connection is closed; readable without the lock
    open: AtomicBool,
    connection: Mutex<Option<Connection>>,
}

impl ConnectionHandle {
    pub(crate) fn new(id: u64, path: PathBuf, connection: Connection) -> Self {
        Self {
            id,
            path,
            opened_at: Timestamp::now(),
            open: AtomicBool::new(true),
            connection: Mutex::new(Some(connection)),
        }
    }

    /// Identifier unique among the handles opened by one manager.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn opened_at(&self) -> Timestamp {
        self.opened_at
    }

    /// Returns true until the manager closes this handle.
    ///
    /// Never blocks, even while another caller is inside
    /// [`Self::with_connection`].
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    /// Runs `f` against the underlying connection.
    ///
    /// Access is serialized: concurrent callers wait for each other.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError::Closed` if the handle has been closed, or
    /// `ConnectionError::Database` if `f` fails.
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let guard = self.lock();
        let connection = guard
            .as_ref()
            .ok_or(ConnectionError::Closed { id: self.id })?;
        f(connection).db_context("Connection callback failed")
    }

    /// Like [`Self::with_connection`] but with mutable access, as needed
    /// for `Connection::transaction`.
    pub fn with_connection_mut<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        let mut guard = self.lock();
        let connection = guard
            .as_mut()
            .ok_or(ConnectionError::Closed { id: self.id })?;
        f(connection).db_context("Connection callback failed")
    }

    /// Closes the connection. Returns false if it was already closed.
    ///
    /// Waits for any running callback to finish. On failure the connection
    /// is put back so the handle stays usable.
    pub(crate) fn close(&self) -> Result<bool> {
        let mut guard = self.lock();
        let Some(connection) = guard.take() else {
            return Ok(false);
        };
        match connection.close() {
            Ok(()) => {
                self.open.store(false, Ordering::Release);
                Ok(true)
            }
            Err((connection, e)) => {
                *guard = Some(connection);
                Err(ConnectionError::database("Failed to close database connection")
                    .with_source(e))
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Connection>> {
        self.connection.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PartialEq for ConnectionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ConnectionHandle {}
