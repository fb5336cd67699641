use crate::types::idea::IdeaDraft;
use serde::Serialize;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_SUMMARY_CHARS: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Structural checks run before an idea is persisted. Advisory only: the caller decides
/// whether to block on the returned errors.
pub fn validate_idea(draft: &IdeaDraft) -> ValidationResult {
    let mut errors = Vec::new();

    let title = draft.title.as_deref().unwrap_or_default();
    if title.trim().is_empty() {
        errors.push("Title is required.".to_string());
    } else if title.chars().count() > MAX_TITLE_CHARS {
        errors.push(format!("Title is too long (max {MAX_TITLE_CHARS} characters)."));
    }

    if let Some(summary) = draft.summary.as_deref() {
        if summary.chars().count() > MAX_SUMMARY_CHARS {
            errors.push(format!("Summary is too long (max {MAX_SUMMARY_CHARS} characters)."));
        }
    }

    ValidationResult {
        valid: errors.is_empty(),
        errors,
    }
}
