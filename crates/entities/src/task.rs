//! Task-related entity definitions.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Maximum task progress percentage.
pub const MAX_PROGRESS: u8 = 100;

/// Error returned when parsing a fixed-vocabulary field fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} value: {value}")]
pub struct ParseEnumError {
    /// Which field failed to parse.
    pub field: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Category of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Study and coursework.
    Study,
    /// Shopping and groceries.
    Shopping,
    /// Personal and everything else.
    Personal,
}

impl Category {
    /// Stable string form used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Shopping => "shopping",
            Self::Personal => "personal",
        }
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "study" => Ok(Self::Study),
            "shopping" => Ok(Self::Shopping),
            "personal" => Ok(Self::Personal),
            other => Err(ParseEnumError {
                field: "category",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Needs attention first.
    High,
    /// Default urgency.
    Medium,
    /// Can wait.
    Low,
}

impl Priority {
    /// Stable string form used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(ParseEnumError {
                field: "priority",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a task, distinct from its progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not yet completed.
    Pending,
    /// Marked done. Terminal for edits.
    Completed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl TaskStatus {
    /// Stable string form used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Whether the task has been completed.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl FromStr for TaskStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(ParseEnumError {
                field: "status",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task owned by a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Row identifier, immutable once assigned.
    pub id: i64,
    /// Email of the owning user.
    pub owner_email: String,
    /// Task title.
    pub title: String,
    /// Category.
    pub category: Category,
    /// Priority.
    pub priority: Priority,
    /// Completion percentage in [0, 100], independent of status.
    pub progress: u8,
    /// Current lifecycle status.
    pub status: TaskStatus,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// Calendar due date.
    pub due_date: NaiveDate,
}

/// Payload for creating a task. Status and timestamps are assigned by the
/// store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    /// Task title.
    pub title: String,
    /// Category.
    pub category: Category,
    /// Priority.
    pub priority: Priority,
    /// Initial completion percentage.
    pub progress: u8,
    /// Calendar due date.
    pub due_date: NaiveDate,
}

impl TaskDraft {
    /// Creates a draft with zero progress.
    pub fn new(
        title: impl Into<String>,
        category: Category,
        priority: Priority,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            priority,
            progress: 0,
            due_date,
        }
    }

    /// Sets the initial progress.
    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = progress;
        self
    }
}

/// Payload for editing a task. The edit form always submits every mutable
/// field, so none are optional. Status is not editable here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPatch {
    /// New title.
    pub title: String,
    /// New category.
    pub category: Category,
    /// New priority.
    pub priority: Priority,
    /// New completion percentage.
    pub progress: u8,
    /// New due date.
    pub due_date: NaiveDate,
}

/// Per-owner completion counts for analytics rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionStats {
    /// Total number of tasks.
    pub total: u64,
    /// Tasks with status Completed.
    pub completed: u64,
    /// Tasks with status Pending.
    pub pending: u64,
}
