//! Database row types and their entity conversions.

use entities::{Category, Priority, Task, TaskStatus, User};
use sqlx::FromRow;

/// Database row for User
#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub date_of_birth: String,
    pub xp: i64,
    pub streak: i64,
    pub last_login: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let date_of_birth = if row.date_of_birth.is_empty() {
            None
        } else {
            chrono::NaiveDate::parse_from_str(&row.date_of_birth, "%Y-%m-%d").ok()
        };

        User {
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            date_of_birth,
            xp: row.xp.max(0) as u32,
            streak: row.streak.max(0) as u32,
            last_login: row.last_login.and_then(|s| {
                chrono::DateTime::parse_from_rfc3339(&s)
                    .map(|dt| dt.with_timezone(&chrono::Utc))
                    .ok()
            }),
        }
    }
}

/// Database row for Task
#[derive(Debug, FromRow)]
pub(crate) struct TaskRow {
    pub id: i64,
    pub owner_email: String,
    pub title: String,
    pub category: String,
    pub priority: String,
    pub progress: i64,
    pub status: String,
    pub created_at: String,
    pub due_date: String,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            owner_email: row.owner_email,
            title: row.title,
            category: row.category.parse().unwrap_or(Category::Personal),
            priority: row.priority.parse().unwrap_or(Priority::Medium),
            progress: row.progress.clamp(0, 100) as u8,
            status: row.status.parse().unwrap_or(TaskStatus::Pending),
            created_at: chrono::DateTime::parse_from_rfc3339(&row.created_at)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
            due_date: chrono::NaiveDate::parse_from_str(&row.due_date, "%Y-%m-%d")
                .unwrap_or_default(),
        }
    }
}

/// Formats an optional date of birth for storage. The column is NOT NULL
/// with an empty-string default, mirroring the persisted schema.
pub(crate) fn dob_to_string(dob: Option<chrono::NaiveDate>) -> String {
    dob.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
