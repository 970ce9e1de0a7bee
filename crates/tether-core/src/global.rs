//! Process-wide connection manager.
//!
//! For applications that want one database handle reachable from anywhere
//! without threading a [`ConnectionManager`] through every call. Prefer
//! owning a manager explicitly where that is practical.
//!
//! ```no_run
//! use tether_core::global;
//!
//! # fn main() -> tether_core::Result<()> {
//! global::init()?;
//! let handle = global::get_connection()?;
//! handle.with_connection(|conn| conn.execute_batch("SELECT 1"))?;
//! global::close()?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::{
    error::{ConnectionError, Result},
    handle::ConnectionHandle,
    manager::ConnectionManager,
};

static MANAGER: OnceCell<ConnectionManager> = OnceCell::new();

/// Installs `manager` as the process-wide manager.
///
/// Must happen before anything calls [`manager`], which otherwise installs
/// a default manager for `database.db`.
///
/// # Errors
///
/// Returns `ConnectionError::AlreadyInstalled` if a manager is already set
pub fn install(manager: ConnectionManager) -> Result<()> {
    MANAGER
        .set(manager)
        .map_err(|_| ConnectionError::AlreadyInstalled)
}

/// The process-wide manager, created with default settings on first use.
pub fn manager() -> &'static ConnectionManager {
    MANAGER.get_or_init(ConnectionManager::default)
}

/// [`ConnectionManager::init`] on the process-wide manager.
pub fn init() -> Result<()> {
    manager().init()
}

/// [`ConnectionManager::get_connection`] on the process-wide manager.
pub fn get_connection() -> Result<Arc<ConnectionHandle>> {
    manager().get_connection()
}

/// [`ConnectionManager::close`] on the process-wide manager.
pub fn close() -> Result<bool> {
    manager().close()
}
