#![allow(dead_code)]

use myapp::{Config, sea_orm::DatabaseConnection};
use tempfile::TempDir;

pub struct TestContext {
    // keeps the database file alive for file-backed contexts
    _dir: Option<TempDir>,
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Fresh in-memory database, bootstrapped like the binary does
    pub async fn new() -> Self {
        let config = Config::default().with_database(":memory:");
        let db = myapp::bootstrap(&config).await.unwrap();

        Self { _dir: None, db }
    }

    /// Fresh database file inside a temporary directory
    pub async fn with_file(name: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let config = Config::default().with_database(path.to_string_lossy());
        let db = myapp::bootstrap(&config).await.unwrap();

        Self {
            _dir: Some(dir),
            db,
        }
    }
}
