//! Boundary validation and input parsing.
//!
//! The presentation layer submits strings; everything is validated here
//! before a store call is made. Unknown category/priority values are
//! rejected, not coerced to a default.

use chrono::NaiveDate;
use entities::{Category, Priority, TaskDraft, TaskPatch, MAX_PROGRESS};

use crate::ValidationError;

/// Validates a title, returning the trimmed form. An empty or
/// whitespace-only title (including an empty voice transcript) is rejected.
pub fn validate_title(title: &str) -> Result<&str, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed)
}

/// Validates a progress percentage.
pub fn validate_progress(progress: u8) -> Result<u8, ValidationError> {
    if progress > MAX_PROGRESS {
        return Err(ValidationError::ProgressOutOfRange(progress));
    }
    Ok(progress)
}

/// Parses a due date in `YYYY-MM-DD` form.
pub fn parse_due_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDueDate(s.to_string()))
}

/// Builds a validated draft from raw form input.
pub fn draft_from_input(
    title: &str,
    category: &str,
    priority: &str,
    progress: u8,
    due_date: &str,
) -> Result<TaskDraft, ValidationError> {
    Ok(TaskDraft {
        title: validate_title(title)?.to_string(),
        category: category.parse::<Category>()?,
        priority: priority.parse::<Priority>()?,
        progress: validate_progress(progress)?,
        due_date: parse_due_date(due_date)?,
    })
}

/// Builds a validated patch from raw form input.
pub fn patch_from_input(
    title: &str,
    category: &str,
    priority: &str,
    progress: u8,
    due_date: &str,
) -> Result<TaskPatch, ValidationError> {
    Ok(TaskPatch {
        title: validate_title(title)?.to_string(),
        category: category.parse::<Category>()?,
        priority: priority.parse::<Priority>()?,
        progress: validate_progress(progress)?,
        due_date: parse_due_date(due_date)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(validate_title(""), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_title("   "), Err(ValidationError::EmptyTitle));
        assert_eq!(validate_title("  Buy milk "), Ok("Buy milk"));
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(validate_progress(0), Ok(0));
        assert_eq!(validate_progress(100), Ok(100));
        assert_eq!(
            validate_progress(101),
            Err(ValidationError::ProgressOutOfRange(101))
        );
    }

    #[test]
    fn test_due_date_parsing() {
        assert_eq!(
            parse_due_date("2025-01-01"),
            Ok(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        );
        assert!(matches!(
            parse_due_date("tomorrow"),
            Err(ValidationError::InvalidDueDate(_))
        ));
        assert!(matches!(
            parse_due_date("2025-02-30"),
            Err(ValidationError::InvalidDueDate(_))
        ));
    }

    #[test]
    fn test_unknown_enum_values_rejected_not_defaulted() {
        let err = draft_from_input("Buy milk", "chores", "low", 0, "2025-01-01").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownValue(_)));

        let err = draft_from_input("Buy milk", "shopping", "urgent", 0, "2025-01-01").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownValue(_)));
    }

    #[test]
    fn test_valid_input_builds_draft() {
        let draft = draft_from_input("Buy milk", "shopping", "low", 30, "2025-01-01").unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.category, Category::Shopping);
        assert_eq!(draft.priority, Priority::Low);
        assert_eq!(draft.progress, 30);
    }
}
