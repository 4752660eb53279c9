//! User-related entity definitions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A registered user, identified by email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Email address, the unique identifier.
    pub email: String,
    /// Salted password hash. Never the plaintext password.
    pub password_hash: String,
    /// Date of birth, set from the profile form.
    pub date_of_birth: Option<NaiveDate>,
    /// Experience points. Persisted but unused by core logic.
    pub xp: u32,
    /// Login streak. Persisted but unused by core logic.
    pub streak: u32,
    /// When the user last logged in.
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new user record at registration time.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            date_of_birth: None,
            xp: 0,
            streak: 0,
            last_login: None,
        }
    }

    /// Sets the date of birth.
    pub fn with_date_of_birth(mut self, dob: NaiveDate) -> Self {
        self.date_of_birth = Some(dob);
        self
    }
}
