//! Handlers for the `/api/notes` resource.
//!
//! Writes validate the payload before touching the store, so a malformed
//! body never reaches SQLite and always wins over a missing id.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use quicknote_core::error::CoreError;
use quicknote_core::types::DbId;
use quicknote_db::models::note::NoteFilter;
use quicknote_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{NoteBody, NoteKey};
use crate::query::NoteListParams;
use crate::response::{
    CreatedResponse, MessageResponse, MSG_NOTE_CREATED, MSG_NOTE_DELETED, MSG_NOTE_UPDATED,
};
use crate::state::AppState;

fn note_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Note", id })
}

/// POST /api/notes
///
/// Create a note. `category` defaults to `Others`; `completed` starts false.
pub async fn create_note(
    State(state): State<AppState>,
    NoteBody(input): NoteBody,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let note = input.into_create();

    let id = NoteRepo::create(&state.pool, &note).await?;

    tracing::info!(note_id = id, category = %note.category, "Note created");

    Ok(Json(CreatedResponse {
        id,
        message: MSG_NOTE_CREATED,
    }))
}

/// GET /api/notes
///
/// List notes newest first, optionally filtered by `search` and `category`.
pub async fn list_notes(
    State(state): State<AppState>,
    params: NoteListParams,
) -> AppResult<impl IntoResponse> {
    let filter = NoteFilter::from(params);
    let notes = NoteRepo::list(&state.pool, &filter).await?;

    tracing::debug!(?filter, count = notes.len(), "Notes listed");

    Ok(Json(notes))
}

/// PUT /api/notes/{id}
///
/// Replace every mutable field of a note.
pub async fn update_note(
    State(state): State<AppState>,
    key: NoteKey,
    NoteBody(input): NoteBody,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let note_id = key.id()?;
    let note = input.into_replace();

    if !NoteRepo::replace(&state.pool, note_id, &note).await? {
        return Err(note_not_found(note_id));
    }

    tracing::info!(note_id, completed = note.completed, "Note updated");

    Ok(Json(MessageResponse {
        message: MSG_NOTE_UPDATED,
    }))
}

/// DELETE /api/notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    key: NoteKey,
) -> AppResult<impl IntoResponse> {
    let note_id = key.id()?;

    if !NoteRepo::delete(&state.pool, note_id).await? {
        return Err(note_not_found(note_id));
    }

    tracing::info!(note_id, "Note deleted");

    Ok(Json(MessageResponse {
        message: MSG_NOTE_DELETED,
    }))
}
