//! SQLite connection handling and schema bootstrap.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::{StoreError, StoreResult};

/// How long a connection waits on a locked database before failing with
/// `StoreError::Busy`.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection pool.
///
/// A single connection serializes all writes, matching the single-writer
/// discipline of the persistence model.
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Opens (or creates) the database at the given path and bootstraps the
    /// schema.
    pub async fn open(db_path: &Path) -> StoreResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .busy_timeout(BUSY_TIMEOUT)
            .foreign_keys(true);

        Self::connect(options).await
    }

    /// Opens an in-memory database, used by tests.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::new()
            .in_memory(true)
            .foreign_keys(true);

        Self::connect(options).await
    }

    async fn connect(options: SqliteConnectOptions) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(StoreError::from)?;

        let db = Self { pool };
        db.bootstrap_schema().await?;

        Ok(db)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Creates the tables and indexes if they do not exist.
    async fn bootstrap_schema(&self) -> StoreResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        tracing::debug!("database schema ready");
        Ok(())
    }
}

/// SQL schema definition
const SCHEMA_SQL: &str = r#"
-- Users table. Email is the unique identifier; duplicate registrations
-- are rejected by the primary key.
CREATE TABLE IF NOT EXISTS users (
    email TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    password_hash TEXT NOT NULL,
    date_of_birth TEXT NOT NULL DEFAULT '',
    xp INTEGER NOT NULL DEFAULT 0,
    streak INTEGER NOT NULL DEFAULT 0,
    last_login TEXT
);

-- Tasks table. The rowid alias is the task id.
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    owner_email TEXT NOT NULL REFERENCES users(email),
    title TEXT NOT NULL,
    category TEXT NOT NULL,
    priority TEXT NOT NULL,
    progress INTEGER NOT NULL DEFAULT 0,
    status TEXT NOT NULL DEFAULT 'pending',
    created_at TEXT NOT NULL,
    due_date TEXT NOT NULL
);

-- Indexes for performance
CREATE INDEX IF NOT EXISTS idx_tasks_owner ON tasks(owner_email);
CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status);
"#;
