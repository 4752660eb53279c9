//! Registration and login.

use std::sync::Arc;

use chrono::Utc;
use entities::User;
use store::{StoreError, UserStore};

use crate::{hash_password, verify_password, AuthError, AuthResult, Session};

/// Service handling registration, login, and logout against a `UserStore`.
pub struct AuthService {
    users: Arc<dyn UserStore>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Registers a new user with a salted password hash. A taken email is
    /// rejected with `EmailTaken`.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AuthResult<()> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(AuthError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        let user = User::new(name, email, hash_password(password));
        match self.users.create_user(&user).await {
            Ok(()) => {
                tracing::info!(email, "user registered");
                Ok(())
            }
            Err(StoreError::AlreadyExists { .. }) => Err(AuthError::EmailTaken(email.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// Authenticates a user and establishes a session. Wrong password and
    /// unknown email are indistinguishable to the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> AuthResult<Session> {
        let Some(user) = self.users.get_user(email.trim()).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        self.users.record_login(&user.email, Utc::now()).await?;
        tracing::info!(email = %user.email, "user logged in");

        Ok(Session::new(user.email, user.name))
    }

    /// Ends a session. Consuming the value is the LoggedIn -> LoggedOut
    /// transition.
    pub fn logout(&self, session: Session) {
        tracing::info!(email = %session.email, "user logged out");
    }
}
