//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Duplicate entity.
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },

    /// The underlying store is busy or locked. Callers may retry with a
    /// bounded backoff.
    #[error("store is busy")]
    Busy,

    /// Foreign key constraint violation.
    #[error("foreign key constraint violation: {0}")]
    ForeignKeyViolation(String),

    /// Database error.
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a not found error.
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an already exists error.
    pub fn already_exists(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity_type,
            id: id.into(),
        }
    }

    /// Whether the operation failed because the store was busy.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_foreign_key_violation() {
                return Self::ForeignKeyViolation(db_err.message().to_string());
            }
            // SQLITE_BUSY (5) and SQLITE_LOCKED (6)
            let code = db_err.code();
            if matches!(code.as_deref(), Some("5") | Some("6"))
                || db_err.message().contains("database is locked")
            {
                return Self::Busy;
            }
        }
        Self::Database(e)
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
