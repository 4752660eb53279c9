//! Completion analytics.

use std::sync::Arc;

use entities::CompletionStats;
use store::TaskStore;

use crate::retry::with_busy_retry;
use crate::ServiceResult;

/// Read-only aggregates for analytics rendering. Produces no writes.
pub struct AnalyticsService {
    tasks: Arc<dyn TaskStore>,
}

impl AnalyticsService {
    pub fn new(tasks: Arc<dyn TaskStore>) -> Self {
        Self { tasks }
    }

    /// Returns the owner's task counts by status.
    pub async fn completion_summary(&self, owner_email: &str) -> ServiceResult<CompletionStats> {
        let tasks = &*self.tasks;
        Ok(with_busy_retry(|| tasks.count_by_status(owner_email)).await?)
    }
}
