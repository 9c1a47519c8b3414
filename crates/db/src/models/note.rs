//! Note entity model, write DTOs, and list filters.

use quicknote_core::error::CoreError;
use quicknote_core::notes;
use quicknote_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
///
/// `completed` is stored as SQLite `0`/`1` and exposed as a JSON boolean.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for both `POST /api/notes` and `PUT /api/notes/{id}`.
///
/// Every field is optional at the wire level so that missing fields reach
/// [`NoteInput::validate`] instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoteInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    /// Ignored on create.
    pub completed: Option<bool>,
}

impl NoteInput {
    /// Run the write-payload rules from [`quicknote_core::notes`].
    pub fn validate(&self) -> Result<(), CoreError> {
        notes::validate_note(
            self.title.as_deref(),
            self.description.as_deref(),
            self.category.as_deref(),
        )
    }

    /// Convert a validated payload into an insert DTO.
    pub fn into_create(self) -> CreateNote {
        let category = notes::resolve_category(self.category.as_deref()).to_string();
        CreateNote {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category,
        }
    }

    /// Convert a validated payload into a full-replacement DTO.
    ///
    /// Omitted `category` and `completed` fall back to their column defaults.
    pub fn into_replace(self) -> ReplaceNote {
        let category = notes::resolve_category(self.category.as_deref()).to_string();
        ReplaceNote {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category,
            completed: self.completed.unwrap_or(false),
        }
    }
}

/// DTO for inserting a new note. New notes always start incomplete.
#[derive(Debug, Clone)]
pub struct CreateNote {
    pub title: String,
    pub description: String,
    pub category: String,
}

/// DTO for replacing every mutable field of an existing note.
#[derive(Debug, Clone)]
pub struct ReplaceNote {
    pub title: String,
    pub description: String,
    pub category: String,
    pub completed: bool,
}

/// Which predicate a list query applies.
///
/// Each variant maps to exactly one parameter-bound statement in
/// [`NoteRepo::list`](crate::repositories::NoteRepo::list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteFilter {
    All,
    /// Substring match against title or description.
    Search(String),
    /// Exact category match.
    Category(String),
    SearchAndCategory { search: String, category: String },
}

impl NoteFilter {
    /// Pick the filter variant from optional query parameters.
    ///
    /// Empty strings are treated the same as absent parameters.
    pub fn from_params(search: Option<String>, category: Option<String>) -> Self {
        let search = search.filter(|s| !s.is_empty());
        let category = category.filter(|c| !c.is_empty());

        match (search, category) {
            (None, None) => Self::All,
            (Some(search), None) => Self::Search(search),
            (None, Some(category)) => Self::Category(category),
            (Some(search), Some(category)) => Self::SearchAndCategory { search, category },
        }
    }
}
