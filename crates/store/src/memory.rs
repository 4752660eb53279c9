//! In-memory store implementation for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use entities::{CompletionStats, Task, TaskDraft, TaskPatch, TaskStatus, User};

use crate::{StoreError, StoreResult, TaskStore, UserStore};

/// In-memory implementation of both store traits. Mirrors the SQLite
/// semantics, including the owner foreign-key check.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    tasks: RwLock<HashMap<i64, Task>>,
    next_id: AtomicI64,
}

impl MemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: &User) -> StoreResult<()> {
        let mut users = self.users.write().unwrap();
        if users.contains_key(&user.email) {
            return Err(StoreError::already_exists("user", &user.email));
        }
        users.insert(user.email.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().unwrap();
        Ok(users.get(email).cloned())
    }

    async fn update_profile(
        &self,
        email: &str,
        name: &str,
        date_of_birth: Option<NaiveDate>,
    ) -> StoreResult<()> {
        let mut users = self.users.write().unwrap();
        let user = users
            .get_mut(email)
            .ok_or_else(|| StoreError::not_found("user", email))?;
        user.name = name.to_string();
        user.date_of_birth = date_of_birth;
        Ok(())
    }

    async fn record_login(&self, email: &str, when: DateTime<Utc>) -> StoreResult<()> {
        let mut users = self.users.write().unwrap();
        let user = users
            .get_mut(email)
            .ok_or_else(|| StoreError::not_found("user", email))?;
        user.last_login = Some(when);
        Ok(())
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn insert_task(&self, owner_email: &str, draft: &TaskDraft) -> StoreResult<i64> {
        if !self.users.read().unwrap().contains_key(owner_email) {
            return Err(StoreError::ForeignKeyViolation(format!(
                "no such user: {owner_email}"
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let task = Task {
            id,
            owner_email: owner_email.to_string(),
            title: draft.title.clone(),
            category: draft.category,
            priority: draft.priority,
            progress: draft.progress,
            status: TaskStatus::Pending,
            created_at: Utc::now(),
            due_date: draft.due_date,
        };

        self.tasks.write().unwrap().insert(id, task);
        Ok(id)
    }

    async fn list_tasks(&self, owner_email: &str) -> StoreResult<Vec<Task>> {
        let tasks = self.tasks.read().unwrap();
        let mut result: Vec<Task> = tasks
            .values()
            .filter(|t| t.owner_email == owner_email)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn get_task(&self, id: i64) -> StoreResult<Option<Task>> {
        let tasks = self.tasks.read().unwrap();
        Ok(tasks.get(&id).cloned())
    }

    async fn update_task(&self, id: i64, patch: &TaskPatch) -> StoreResult<()> {
        let mut tasks = self.tasks.write().unwrap();
        let task = tasks
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("task", id.to_string()))?;
        task.title = patch.title.clone();
        task.category = patch.category;
        task.priority = patch.priority;
        task.progress = patch.progress;
        task.due_date = patch.due_date;
        Ok(())
    }

    async fn delete_task(&self, id: i64) -> StoreResult<()> {
        let mut tasks = self.tasks.write().unwrap();
        tasks
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("task", id.to_string()))
    }

    async fn mark_complete(&self, id: i64) -> StoreResult<()> {
        let mut tasks = self.tasks.write().unwrap();
        let task = tasks
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("task", id.to_string()))?;
        task.status = TaskStatus::Completed;
        Ok(())
    }

    async fn count_by_status(&self, owner_email: &str) -> StoreResult<CompletionStats> {
        let tasks = self.tasks.read().unwrap();
        let mut stats = CompletionStats::default();
        for task in tasks.values().filter(|t| t.owner_email == owner_email) {
            stats.total += 1;
            match task.status {
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::Pending => stats.pending += 1,
            }
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities::{Category, Priority};

    fn draft(title: &str) -> TaskDraft {
        TaskDraft::new(
            title,
            Category::Study,
            Priority::High,
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_memory_store_matches_sqlite_semantics() {
        let store = MemoryStore::new();
        store
            .create_user(&User::new("Ann", "ann@x.com", "salt$hash"))
            .await
            .unwrap();

        // Duplicate email rejected
        assert!(matches!(
            store
                .create_user(&User::new("Ann", "ann@x.com", "salt$hash"))
                .await
                .unwrap_err(),
            StoreError::AlreadyExists { .. }
        ));

        // Unknown owner rejected
        assert!(matches!(
            store.insert_task("ghost@x.com", &draft("x")).await.unwrap_err(),
            StoreError::ForeignKeyViolation(_)
        ));

        let id = store.insert_task("ann@x.com", &draft("Read")).await.unwrap();
        store.mark_complete(id).await.unwrap();

        let task = store.get_task(id).await.unwrap().unwrap();
        assert_eq!(task.status, TaskStatus::Completed);

        store.delete_task(id).await.unwrap();
        assert!(matches!(
            store.delete_task(id).await.unwrap_err(),
            StoreError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_memory_store_ids_are_stable_and_unique() {
        let store = MemoryStore::new();
        store
            .create_user(&User::new("Ann", "ann@x.com", "salt$hash"))
            .await
            .unwrap();

        let first = store.insert_task("ann@x.com", &draft("One")).await.unwrap();
        let second = store.insert_task("ann@x.com", &draft("Two")).await.unwrap();
        assert_ne!(first, second);

        store.delete_task(first).await.unwrap();
        let third = store.insert_task("ann@x.com", &draft("Three")).await.unwrap();
        // Ids are never reused
        assert_ne!(third, first);
        assert_ne!(third, second);
    }
}
