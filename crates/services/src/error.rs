//! Service error types.

use entities::ParseEnumError;
use thiserror::Error;

/// Boundary validation failures, caught before any store call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title was empty after trimming. An empty voice transcript lands here
    /// as "no input provided".
    #[error("title must not be empty")]
    EmptyTitle,

    /// Profile name was empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// Progress outside [0, 100].
    #[error("progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(u8),

    /// Due date did not parse as a calendar date.
    #[error("invalid due date: {0}")]
    InvalidDueDate(String),

    /// Category, priority, or status value outside the fixed vocabulary.
    /// Rejected outright, never coerced to a default.
    #[error(transparent)]
    UnknownValue(#[from] ParseEnumError),
}

/// Errors that can occur in the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input rejected at the boundary.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The task has been completed and can no longer be edited.
    #[error("task {id} is completed and can no longer be edited")]
    CompletedTaskImmutable { id: i64 },

    /// Store error, surfaced after any busy retries are exhausted.
    #[error(transparent)]
    Store(#[from] store::StoreError),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
