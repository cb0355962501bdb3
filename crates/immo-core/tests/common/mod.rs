//! Common test utilities shared across integration tests.

use immo_core::{Desk, DeskBuilder};
use tempfile::TempDir;

/// Create a desk backed by a temporary database.
///
/// Returns the temp directory alongside the desk so the database file
/// outlives the test body.
pub async fn create_test_desk() -> (TempDir, Desk) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let desk = DeskBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create desk");
    (temp_dir, desk)
}
