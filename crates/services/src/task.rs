//! Task lifecycle controller.

use std::sync::Arc;

use entities::{Task, TaskDraft, TaskPatch};
use store::{StoreError, TaskStore};

use crate::retry::with_busy_retry;
use crate::{validate_progress, validate_title, ServiceError, ServiceResult};

/// Service for managing the task lifecycle.
///
/// State machine per task: `Pending --edit--> Pending`,
/// `Pending --complete--> Completed`. Completed is terminal for edits;
/// completing an already-completed task is an idempotent no-op.
pub struct TaskService {
    tasks: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(tasks: Arc<dyn TaskStore>) -> Self {
        Self { tasks }
    }

    /// Validates and inserts a new task, returning its id.
    pub async fn add_task(&self, owner_email: &str, draft: TaskDraft) -> ServiceResult<i64> {
        let draft = TaskDraft {
            title: validate_title(&draft.title)?.to_string(),
            progress: validate_progress(draft.progress)?,
            ..draft
        };

        let tasks = &*self.tasks;
        let id = with_busy_retry(|| tasks.insert_task(owner_email, &draft)).await?;
        tracing::info!(id, owner = %owner_email, "task added");
        Ok(id)
    }

    /// Validates and applies an edit to a pending task.
    pub async fn edit_task(&self, id: i64, patch: TaskPatch) -> ServiceResult<()> {
        let patch = TaskPatch {
            title: validate_title(&patch.title)?.to_string(),
            progress: validate_progress(patch.progress)?,
            ..patch
        };

        let current = self
            .tasks
            .get_task(id)
            .await?
            .ok_or_else(|| StoreError::not_found("task", id.to_string()))?;
        if current.status.is_completed() {
            return Err(ServiceError::CompletedTaskImmutable { id });
        }

        let tasks = &*self.tasks;
        with_busy_retry(|| tasks.update_task(id, &patch)).await?;
        tracing::debug!(id, "task edited");
        Ok(())
    }

    /// Marks a task Completed. Completing an already-completed task is a
    /// no-op.
    pub async fn complete_task(&self, id: i64) -> ServiceResult<()> {
        let current = self
            .tasks
            .get_task(id)
            .await?
            .ok_or_else(|| StoreError::not_found("task", id.to_string()))?;
        if current.status.is_completed() {
            tracing::debug!(id, "task already completed");
            return Ok(());
        }

        let tasks = &*self.tasks;
        with_busy_retry(|| tasks.mark_complete(id)).await?;
        tracing::info!(id, "task completed");
        Ok(())
    }

    /// Deletes a task. A missing id is an error, including on double delete.
    pub async fn remove_task(&self, id: i64) -> ServiceResult<()> {
        let tasks = &*self.tasks;
        with_busy_retry(|| tasks.delete_task(id)).await?;
        tracing::info!(id, "task removed");
        Ok(())
    }

    /// Lists the owner's tasks for list, calendar, and chart rendering.
    pub async fn tasks_for(&self, owner_email: &str) -> ServiceResult<Vec<Task>> {
        let tasks = &*self.tasks;
        Ok(with_busy_retry(|| tasks.list_tasks(owner_email)).await?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use entities::{Category, Priority, TaskStatus, User};
    use store::{MemoryStore, UserStore};

    use super::*;
    use crate::ValidationError;

    async fn service_with_owner(email: &str) -> TaskService {
        let store = Arc::new(MemoryStore::new());
        store
            .create_user(&User::new("Ann", email, "salt$hash"))
            .await
            .unwrap();
        TaskService::new(store)
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft::new(
            title,
            Category::Personal,
            Priority::Medium,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_add_rejects_empty_title() {
        let service = service_with_owner("ann@x.com").await;

        let err = service.add_task("ann@x.com", draft("   ")).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::EmptyTitle)
        ));
    }

    #[tokio::test]
    async fn test_add_rejects_out_of_range_progress() {
        let service = service_with_owner("ann@x.com").await;

        let err = service
            .add_task("ann@x.com", draft("Run").with_progress(150))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::ProgressOutOfRange(150))
        ));
    }

    #[tokio::test]
    async fn test_add_trims_title() {
        let service = service_with_owner("ann@x.com").await;

        let id = service
            .add_task("ann@x.com", draft("  Buy milk  "))
            .await
            .unwrap();
        let tasks = service.tasks_for("ann@x.com").await.unwrap();
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].title, "Buy milk");
    }

    #[tokio::test]
    async fn test_completed_task_cannot_be_edited() {
        let service = service_with_owner("ann@x.com").await;

        let id = service.add_task("ann@x.com", draft("Read")).await.unwrap();
        service.complete_task(id).await.unwrap();

        let patch = TaskPatch {
            title: "Read more".to_string(),
            category: Category::Study,
            priority: Priority::High,
            progress: 50,
            due_date: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
        };
        let err = service.edit_task(id, patch).await.unwrap_err();
        assert!(matches!(err, ServiceError::CompletedTaskImmutable { .. }));
    }

    #[tokio::test]
    async fn test_complete_is_idempotent() {
        let service = service_with_owner("ann@x.com").await;

        let id = service.add_task("ann@x.com", draft("Read")).await.unwrap();
        service.complete_task(id).await.unwrap();
        service.complete_task(id).await.unwrap();

        let tasks = service.tasks_for("ann@x.com").await.unwrap();
        assert_eq!(tasks[0].status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn test_missing_ids_surface_not_found() {
        let service = service_with_owner("ann@x.com").await;

        assert!(matches!(
            service.complete_task(99).await.unwrap_err(),
            ServiceError::Store(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            service.remove_task(99).await.unwrap_err(),
            ServiceError::Store(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_edit_round_trip() {
        let service = service_with_owner("ann@x.com").await;

        let id = service.add_task("ann@x.com", draft("Old")).await.unwrap();
        service
            .edit_task(
                id,
                TaskPatch {
                    title: "New".to_string(),
                    category: Category::Study,
                    priority: Priority::High,
                    progress: 60,
                    due_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                },
            )
            .await
            .unwrap();

        let tasks = service.tasks_for("ann@x.com").await.unwrap();
        let task = tasks.iter().find(|t| t.id == id).unwrap();
        assert_eq!(task.title, "New");
        assert_eq!(task.category, Category::Study);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.progress, 60);
        assert_eq!(task.status, TaskStatus::Pending);
    }
}
