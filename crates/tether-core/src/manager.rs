//! Lazily opened, single-connection lifecycle manager.

use std::{
    path::Path,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use log::{error, info, warn};

use crate::{
    config::ConnectionConfig,
    error::Result,
    handle::ConnectionHandle,
    opener::{Opener, SqliteOpener},
    status::{ConnectionInfo, ConnectionState},
};


/// Owns at most one open [`ConnectionHandle`] and hands it out on demand.
///
/// The check-and-open sequence runs under a lock, so concurrent callers
/// on an uninitialized manager trigger exactly one open. That lock is never
/// held while waiting on a handle's connection.
pub struct ConnectionManager<O = SqliteOpener> {
    config: ConnectionConfig,
    opener: O,
    slot: Mutex<Slot>,
}

struct Slot {
    /// Last handle opened; kept after close so the state reads `Closed`
    handle: Option<Arc<ConnectionHandle>>,
    next_id: u64,
}

impl Slot {
    fn state(&self) -> ConnectionState {
        match self.handle.as_ref() {
            None => ConnectionState::Uninitialized,
            Some(handle) if handle.is_open() => ConnectionState::Open,
            Some(_) => ConnectionState::Closed,
        }
    }
}

impl ConnectionManager<SqliteOpener> {
    /// Creates a manager that opens `config.path()` with `rusqlite`.
    ///
    /// Nothing is opened until [`Self::init`] or [`Self::get_connection`].
    pub fn new(config: ConnectionConfig) -> Self {
        Self::with_opener(config, SqliteOpener)
    }
}

impl Default for ConnectionManager<SqliteOpener> {
    fn default() -> Self {
        Self::new(ConnectionConfig::default())
    }
}

impl<O: Opener> ConnectionManager<O> {
    /// Creates a manager that uses a custom opener.
    pub fn with_opener(config: ConnectionConfig, opener: O) -> Self {
        Self {
            config,
            opener,
            slot: Mutex::new(Slot {
                handle: None,
                next_id: 1,
            }),
        }
    }

    /// Opens the connection unless a healthy one already exists.
    ///
    /// # Errors
    ///
    /// Returns the open failure. The manager is left without a usable
    /// handle and the next call tries again.
    pub fn init(&self) -> Result<()> {
        let mut slot = self.lock();
        self.ensure_open(&mut slot).map(|_| ())
    }

    /// Returns the shared handle, opening it first if there is none or the
    /// previous one was closed.
    ///
    /// # Errors
    ///
    /// Returns the open failure instead of an unusable handle.
    pub fn get_connection(&self) -> Result<Arc<ConnectionHandle>> {
        let mut slot = self.lock();
        self.ensure_open(&mut slot)
    }

    /// Closes the current handle. Returns whether a handle was closed.
    ///
    /// Closing when nothing is open is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError::Database` if SQLite refuses to close. The
    /// handle stays open in that case so the call can be retried.
    ///
    /// Blocks until callbacks running on the handle return, so it must not
    /// be called from inside one of them.
    pub fn close(&self) -> Result<bool> {
        // The slot lock is released before waiting on the connection, so a
        // callback running on the handle can still reach the manager.
        let Some(handle) = self.lock().handle.clone() else {
            return Ok(false);
        };

        match handle.close() {
            Ok(true) => {
                info!(
                    "Database closed: {} (handle #{})",
                    handle.path().display(),
                    handle.id()
                );
                Ok(true)
            }
            Ok(false) => Ok(false),
            Err(e) => {
                error!(
                    "Failed to close database {} (handle #{}): {e}",
                    handle.path().display(),
                    handle.id()
                );
                Err(e)
            }
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.lock().state()
    }

    /// Snapshot of the manager for display or serialization.
    pub fn info(&self) -> ConnectionInfo {
        let slot = self.lock();
        let handle = slot.handle.as_ref();

        ConnectionInfo {
            path: self.config.path().to_path_buf(),
            state: slot.state(),
            handle_id: handle.map(|h| h.id()),
            opened_at: handle.map(|h| h.opened_at()),
            sqlite_version: rusqlite::version(),
        }
    }

    pub fn path(&self) -> &Path {
        self.config.path()
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    fn ensure_open(&self, slot: &mut Slot) -> Result<Arc<ConnectionHandle>> {
        if let Some(handle) = slot.handle.as_ref().filter(|h| h.is_open()) {
            return Ok(Arc::clone(handle));
        }

        let connection = self.opener.open(&self.config).map_err(|e| {
            error!(
                "Failed to open database {}: {e}",
                self.config.path().display()
            );
            e
        })?;

        let id = slot.next_id;
        slot.next_id += 1;
        let handle = Arc::new(ConnectionHandle::new(
            id,
            self.config.path().to_path_buf(),
            connection,
        ));
        slot.handle = Some(Arc::clone(&handle));

        info!(
            "Database connected: {} (handle #{id})",
            self.config.path().display()
        );
        Ok(handle)
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<O> Drop for ConnectionManager<O> {
    fn drop(&mut self) {
        let slot = self.slot.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = slot.handle.take() {
            if let Err(e) = handle.close() {
                warn!("Failed to close database on shutdown: {e}");
            }
        }
    }
}
