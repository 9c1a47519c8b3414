//! Note category constants and write-payload validation.
//!
//! Pure functions only: everything here runs before a statement reaches
//! the store, identically for the create and update paths.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub const CATEGORY_WORK: &str = "Work";
pub const CATEGORY_PERSONAL: &str = "Personal";
pub const CATEGORY_OTHERS: &str = "Others";

/// All accepted category values. Matching is case-sensitive.
pub const VALID_CATEGORIES: &[&str] = &[CATEGORY_WORK, CATEGORY_PERSONAL, CATEGORY_OTHERS];

/// Category stored when a payload omits one.
pub const DEFAULT_CATEGORY: &str = CATEGORY_OTHERS;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_MISSING_FIELDS: &str = "Title and description are required";
pub const MSG_INVALID_CATEGORY: &str = "Invalid category";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Normalize an optional category: an empty string counts as omitted.
fn present(category: Option<&str>) -> Option<&str> {
    category.filter(|c| !c.is_empty())
}

/// Check whether `category` is one of [`VALID_CATEGORIES`].
pub fn is_valid_category(category: &str) -> bool {
    VALID_CATEGORIES.contains(&category)
}

/// Validate a note write payload.
///
/// Title and description must both be present and non-empty. A category,
/// when given, must be one of the fixed set. The missing-field check wins
/// when both rules fail.
pub fn validate_note(
    title: Option<&str>,
    description: Option<&str>,
    category: Option<&str>,
) -> Result<(), CoreError> {
    let has_title = title.is_some_and(|t| !t.is_empty());
    let has_description = description.is_some_and(|d| !d.is_empty());
    if !has_title || !has_description {
        return Err(CoreError::Validation(MSG_MISSING_FIELDS.to_string()));
    }

    if let Some(category) = present(category) {
        if !is_valid_category(category) {
            return Err(CoreError::Validation(MSG_INVALID_CATEGORY.to_string()));
        }
    }

    Ok(())
}

/// Resolve the category to persist, falling back to [`DEFAULT_CATEGORY`].
pub fn resolve_category(category: Option<&str>) -> &str {
    present(category).unwrap_or(DEFAULT_CATEGORY)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
