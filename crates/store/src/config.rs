//! Store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persistence configuration. The database path is the only configurable
/// value in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,
}

fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskdeck")
        .join("taskdeck.db")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from the environment.
    pub fn load() -> Self {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(path) = std::env::var("TASKDECK_DATABASE_PATH") {
            config.database_path = PathBuf::from(path);
        }

        config
    }
}
