//! Store traits.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use entities::{CompletionStats, Task, TaskDraft, TaskPatch, User};

use crate::StoreResult;

/// Trait for user credential and profile storage.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates a new user. Fails with `AlreadyExists` if the email is taken.
    async fn create_user(&self, user: &User) -> StoreResult<()>;

    /// Gets a user by email.
    async fn get_user(&self, email: &str) -> StoreResult<Option<User>>;

    /// Overwrites the mutable profile fields. Idempotent.
    async fn update_profile(
        &self,
        email: &str,
        name: &str,
        date_of_birth: Option<NaiveDate>,
    ) -> StoreResult<()>;

    /// Stamps the user's last login time.
    async fn record_login(&self, email: &str, when: DateTime<Utc>) -> StoreResult<()>;
}

/// Trait for task storage operations.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts a new task with status Pending and returns its id.
    async fn insert_task(&self, owner_email: &str, draft: &TaskDraft) -> StoreResult<i64>;

    /// Lists all tasks for the owner.
    async fn list_tasks(&self, owner_email: &str) -> StoreResult<Vec<Task>>;

    /// Gets a task by id.
    async fn get_task(&self, id: i64) -> StoreResult<Option<Task>>;

    /// Overwrites the mutable fields of a task. Fails with `NotFound` if the
    /// id does not exist.
    async fn update_task(&self, id: i64, patch: &TaskPatch) -> StoreResult<()>;

    /// Deletes a task. Fails with `NotFound` if the id does not exist.
    async fn delete_task(&self, id: i64) -> StoreResult<()>;

    /// Sets a task's status to Completed. Fails with `NotFound` if the id
    /// does not exist.
    async fn mark_complete(&self, id: i64) -> StoreResult<()>;

    /// Counts the owner's tasks by status.
    async fn count_by_status(&self, owner_email: &str) -> StoreResult<CompletionStats>;
}
