//! Validation rules for news articles and categories.

use crate::error::CoreError;

/// Validate a news article title (non-empty, <= 200 chars).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.len() > 200 {
        return Err(CoreError::Validation(
            "Title must be at most 200 characters".into(),
        ));
    }
    Ok(())
}

/// Validate news article body content (non-empty).
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Content must not be empty".into()));
    }
    Ok(())
}

/// Validate a category name (non-empty, <= 100 chars).
pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Category name must not be empty".into(),
        ));
    }
    if name.len() > 100 {
        return Err(CoreError::Validation(
            "Category name must be at most 100 characters".into(),
        ));
    }
    Ok(())
}
