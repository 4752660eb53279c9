//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad credentials. Deliberately does not say whether the email or the
    /// password was wrong, so registered emails cannot be enumerated.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A user with this email is already registered.
    #[error("email already registered: {0}")]
    EmailTaken(String),

    /// A required registration field was empty.
    #[error("{0} must not be empty")]
    MissingField(&'static str),

    /// Stored hash is malformed.
    #[error("malformed password hash")]
    MalformedHash,

    /// Store error.
    #[error(transparent)]
    Store(#[from] store::StoreError),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
