//! SQLite-backed store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use entities::{CompletionStats, Task, TaskDraft, TaskPatch, TaskStatus, User};

use crate::rows::{dob_to_string, TaskRow, UserRow};
use crate::{Database, StoreError, StoreResult, TaskStore, UserStore};

/// Store implementation over a SQLite database.
pub struct SqliteStore {
    db: Arc<Database>,
}

impl SqliteStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for SqliteStore {
    async fn create_user(&self, user: &User) -> StoreResult<()> {
        let result = sqlx::query(
            "INSERT INTO users (email, name, password_hash, date_of_birth, xp, streak, \
             last_login)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.password_hash)
        .bind(dob_to_string(user.date_of_birth))
        .bind(user.xp as i64)
        .bind(user.streak as i64)
        .bind(user.last_login.map(|dt| dt.to_rfc3339()))
        .execute(self.db.pool())
        .await;

        match result {
            Ok(_) => {
                tracing::debug!(email = %user.email, "user created");
                Ok(())
            }
            Err(e) => {
                if e.as_database_error()
                    .is_some_and(|d| d.is_unique_violation())
                {
                    Err(StoreError::already_exists("user", &user.email))
                } else {
                    Err(e.into())
                }
            }
        }
    }

    async fn get_user(&self, email: &str) -> StoreResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT email, name, password_hash, date_of_birth, xp, streak, last_login
             FROM users
             WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(User::from))
    }

    async fn update_profile(
        &self,
        email: &str,
        name: &str,
        date_of_birth: Option<NaiveDate>,
    ) -> StoreResult<()> {
        let result = sqlx::query("UPDATE users SET name = ?, date_of_birth = ? WHERE email = ?")
            .bind(name)
            .bind(dob_to_string(date_of_birth))
            .bind(email)
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("user", email));
        }

        Ok(())
    }

    async fn record_login(&self, email: &str, when: DateTime<Utc>) -> StoreResult<()> {
        let result = sqlx::query("UPDATE users SET last_login = ? WHERE email = ?")
            .bind(when.to_rfc3339())
            .bind(email)
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("user", email));
        }

        Ok(())
    }
}

#[async_trait]
impl TaskStore for SqliteStore {
    async fn insert_task(&self, owner_email: &str, draft: &TaskDraft) -> StoreResult<i64> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO tasks (owner_email, title, category, priority, progress, status, \
             created_at, due_date)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(owner_email)
        .bind(&draft.title)
        .bind(draft.category.as_str())
        .bind(draft.priority.as_str())
        .bind(draft.progress as i64)
        .bind(TaskStatus::Pending.as_str())
        .bind(now.to_rfc3339())
        .bind(draft.due_date.format("%Y-%m-%d").to_string())
        .execute(self.db.pool())
        .await?;

        let id = result.last_insert_rowid();
        tracing::debug!(id, owner = %owner_email, "task inserted");
        Ok(id)
    }

    async fn list_tasks(&self, owner_email: &str) -> StoreResult<Vec<Task>> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            "SELECT id, owner_email, title, category, priority, progress, status, created_at, \
             due_date
             FROM tasks
             WHERE owner_email = ?
             ORDER BY created_at DESC",
        )
        .bind(owner_email)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn get_task(&self, id: i64) -> StoreResult<Option<Task>> {
        let row: Option<TaskRow> = sqlx::query_as(
            "SELECT id, owner_email, title, category, priority, progress, status, created_at, \
             due_date
             FROM tasks
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(Task::from))
    }

    async fn update_task(&self, id: i64, patch: &TaskPatch) -> StoreResult<()> {
        let result = sqlx::query(
            "UPDATE tasks SET title = ?, category = ?, priority = ?, progress = ?, due_date = ? \
             WHERE id = ?",
        )
        .bind(&patch.title)
        .bind(patch.category.as_str())
        .bind(patch.priority.as_str())
        .bind(patch.progress as i64)
        .bind(patch.due_date.format("%Y-%m-%d").to_string())
        .bind(id)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("task", id.to_string()));
        }

        Ok(())
    }

    async fn delete_task(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("task", id.to_string()));
        }

        tracing::debug!(id, "task deleted");
        Ok(())
    }

    async fn mark_complete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("UPDATE tasks SET status = ? WHERE id = ?")
            .bind(TaskStatus::Completed.as_str())
            .bind(id)
            .execute(self.db.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("task", id.to_string()));
        }

        Ok(())
    }

    async fn count_by_status(&self, owner_email: &str) -> StoreResult<CompletionStats> {
        let counts: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM tasks WHERE owner_email = ? GROUP BY status")
                .bind(owner_email)
                .fetch_all(self.db.pool())
                .await?;

        let mut stats = CompletionStats::default();
        for (status, count) in counts {
            let count = count.max(0) as u64;
            stats.total += count;
            match status.as_str() {
                "completed" => stats.completed += count,
                _ => stats.pending += count,
            }
        }

        Ok(stats)
    }
}
