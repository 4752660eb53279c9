//! Session types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A logged-in session.
///
/// An explicit value held by the caller, not a process-wide flag. A session
/// exists only between a successful `authenticate` and `logout`; there is no
/// expiry, token, or multi-device invalidation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier.
    pub id: Uuid,
    /// Email of the logged-in user.
    pub email: String,
    /// Display name of the logged-in user.
    pub name: String,
    /// When the session was established.
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new session for the given user.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            name: name.into(),
            logged_in_at: Utc::now(),
        }
    }
}
