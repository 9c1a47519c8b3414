//! Query parameter types for API handlers.

use axum::extract::{FromRequestParts, Query};
use quicknote_db::models::note::NoteFilter;
use serde::Deserialize;

use crate::error::AppError;

/// Query parameters for `GET /api/notes` (`?search=&category=`).
///
/// Extracted directly; a malformed query string (e.g. a repeated key)
/// becomes a 400 `VALIDATION_ERROR`.
#[derive(Debug, Default, Deserialize, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct NoteListParams {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl From<NoteListParams> for NoteFilter {
    fn from(params: NoteListParams) -> Self {
        NoteFilter::from_params(params.search, params.category)
    }
}
