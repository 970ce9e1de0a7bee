//! Lifecycle management for a single shared SQLite connection.
//!
//! This crate owns one lazily opened connection to a local database file,
//! hands it out to callers, and closes it on shutdown. It deliberately does
//! not pool connections or wrap statement execution: callers receive a
//! [`ConnectionHandle`] and issue statements against the `rusqlite`
//! connection directly.
//!
//! # Lifecycle
//!
//! A [`ConnectionManager`] moves between three [`ConnectionState`]s:
//!
//! - **Uninitialized**: nothing opened yet
//! - **Open**: one live handle, shared by every `get_connection` caller
//! - **Closed**: the last handle was closed; the next `init` or
//!   `get_connection` opens a new one
//!
//! Failures are returned as [`ConnectionError`] and also logged through the
//! `log` facade.
//!
//! # Quick Start
//!
//! ```rust
//! use tether_core::{ConnectionConfig, ConnectionManager};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConnectionConfig::builder()
//!     .with_database_path(Some("app.db"))
//!     .build()?;
//! let manager = ConnectionManager::new(config);
//!
//! // Opens on first use
//! let handle = manager.get_connection()?;
//! handle.with_connection(|conn| {
//!     conn.execute_batch("CREATE TABLE IF NOT EXISTS notes (body TEXT)")
//! })?;
//!
//! manager.close()?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod global;
pub mod handle;
pub mod manager;
pub mod opener;
pub mod status;

// Re-export commonly used types
pub use config::{ConnectionConfig, ConnectionConfigBuilder, DEFAULT_DATABASE_PATH};
pub use error::{ConnectionError, DatabaseResultExt, Result};
pub use handle::ConnectionHandle;
pub use manager::ConnectionManager;
pub use opener::{Opener, SqliteOpener};
pub use status::{ConnectionInfo, ConnectionState};
