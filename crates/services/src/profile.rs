//! Profile service.

use std::sync::Arc;

use chrono::NaiveDate;
use entities::User;
use store::UserStore;

use crate::retry::with_busy_retry;
use crate::{ServiceResult, ValidationError};

/// Service for reading and saving user profiles.
pub struct ProfileService {
    users: Arc<dyn UserStore>,
}

impl ProfileService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Loads a user's profile.
    pub async fn profile(&self, email: &str) -> ServiceResult<Option<User>> {
        let users = &*self.users;
        Ok(with_busy_retry(|| users.get_user(email)).await?)
    }

    /// Overwrites the mutable profile fields. Idempotent: saving the same
    /// values twice is not an error.
    pub async fn save_profile(
        &self,
        email: &str,
        name: &str,
        date_of_birth: Option<NaiveDate>,
    ) -> ServiceResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let users = &*self.users;
        with_busy_retry(|| users.update_profile(email, name, date_of_birth)).await?;
        tracing::debug!(email, "profile saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use store::{MemoryStore, StoreError};

    use super::*;
    use crate::ServiceError;

    #[tokio::test]
    async fn test_save_and_reload_profile() {
        let store = Arc::new(MemoryStore::new());
        store
            .create_user(&User::new("Ann", "ann@x.com", "salt$hash"))
            .await
            .unwrap();
        let profiles = ProfileService::new(store);

        let dob = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        profiles
            .save_profile("ann@x.com", "Ann B.", Some(dob))
            .await
            .unwrap();
        // Idempotent
        profiles
            .save_profile("ann@x.com", "Ann B.", Some(dob))
            .await
            .unwrap();

        let user = profiles.profile("ann@x.com").await.unwrap().unwrap();
        assert_eq!(user.name, "Ann B.");
        assert_eq!(user.date_of_birth, Some(dob));
    }

    #[tokio::test]
    async fn test_save_unknown_user_errors() {
        let profiles = ProfileService::new(Arc::new(MemoryStore::new()));

        let err = profiles
            .save_profile("ghost@x.com", "Ghost", None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Store(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let profiles = ProfileService::new(Arc::new(MemoryStore::new()));

        let err = profiles.save_profile("ann@x.com", "  ", None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
