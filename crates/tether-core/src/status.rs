//! Lifecycle state and status snapshots.

use std::{fmt, path::PathBuf};

use jiff::Timestamp;
use serde::Serialize;

/// Lifecycle state of a [`crate::ConnectionManager`].
///
/// `Uninitialized` and `Closed` behave the same on the next `init` or
/// `get_connection`: both open a fresh connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Uninitialized,
    Open,
    Closed,
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Uninitialized => "○",
            Self::Open => "●",
            Self::Closed => "✗",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Point-in-time description of a manager and its current handle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionInfo {
    pub path: PathBuf,
    pub state: ConnectionState,
    /// Id of the current handle, if one was ever opened
    pub handle_id: Option<u64>,
    pub opened_at: Option<Timestamp>,
    pub sqlite_version: &'static str,
}

impl fmt::Display for ConnectionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.state.icon(), self.path.display())?;
        writeln!(f, "State: {}", self.state)?;
        if let Some(id) = self.handle_id {
            writeln!(f, "Handle: #{id}")?;
        }
        if let Some(opened_at) = self.opened_at {
            writeln!(f, "Opened: {}", opened_at.strftime("%Y-%m-%d %H:%M:%S UTC"))?;
        }
        write!(f, "SQLite: {}", self.sqlite_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_display() {
        assert_eq!(ConnectionState::Uninitialized.to_string(), "uninitialized");
        assert_eq!(ConnectionState::Open.to_string(), "open");
        assert_eq!(ConnectionState::Closed.to_string(), "closed");
    }

    #[test]
    fn test_info_display_omits_missing_handle() {
        let info = ConnectionInfo {
            path: PathBuf::from("database.db"),
            state: ConnectionState::Uninitialized,
            handle_id: None,
            opened_at: None,
            sqlite_version: "3.50.0",
        };
        let output = info.to_string();

        assert!(output.starts_with("○ database.db"));
        assert!(output.contains("State: uninitialized"));
        assert!(!output.contains("Handle:"));
        assert!(!output.contains("Opened:"));
        assert!(output.ends_with("SQLite: 3.50.0"));
    }

    #[test]
    fn test_info_serializes_state_as_snake_case() {
        let info = ConnectionInfo {
            path: PathBuf::from("database.db"),
            state: ConnectionState::Open,
            handle_id: Some(2),
            opened_at: Some(Timestamp::UNIX_EPOCH),
            sqlite_version: "3.50.0",
        };
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["state"], "open");
        assert_eq!(json["handle_id"], 2);
        assert_eq!(json["path"], "database.db");
        assert_eq!(json["opened_at"], "1970-01-01T00:00:00Z");
    }
}
