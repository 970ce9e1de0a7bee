use tempfile::TempDir;
use tether_core::{ConnectionConfig, ConnectionManager};

/// Helper function to create a manager backed by a temporary database
pub fn create_test_manager() -> (TempDir, ConnectionManager) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let config = ConnectionConfig::builder()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to build config");
    (temp_dir, ConnectionManager::new(config))
}
