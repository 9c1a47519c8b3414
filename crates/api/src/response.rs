//! Response bodies for write endpoints.

use quicknote_core::types::DbId;
use serde::Serialize;

pub const MSG_NOTE_CREATED: &str = "Note created successfully";
pub const MSG_NOTE_UPDATED: &str = "Note updated successfully";
pub const MSG_NOTE_DELETED: &str = "Note deleted successfully";

/// `{ "id": ..., "message": ... }` returned after an insert.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
    pub message: &'static str,
}

/// `{ "message": ... }` returned after an update or delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
