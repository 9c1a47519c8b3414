//! Request extractors for the note endpoints.
//!
//! Both reject with [`AppError`] so every failure, including malformed
//! input, leaves the server as a `{ "error": ..., "code": ... }` body.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use quicknote_core::error::CoreError;
use quicknote_core::types::DbId;
use quicknote_db::models::note::NoteInput;

use crate::error::AppError;
use crate::state::AppState;

/// JSON write payload for create and update.
///
/// A missing body, or one not declared as JSON, is read as an empty payload
/// so the usual "Title and description are required" check answers it.
/// Declared JSON that fails to parse, or has wrongly typed fields, is a 400.
///
/// ```ignore
/// async fn create(NoteBody(input): NoteBody) -> AppResult<Json<()>> { ... }
/// ```
pub struct NoteBody(pub NoteInput);

impl FromRequest<AppState> for NoteBody {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Core(CoreError::Validation(rejection.body_text())))?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(NoteBody(NoteInput::default()));
        }

        let input = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::Core(CoreError::Validation(format!("Invalid JSON body: {e}")))
        })?;
        Ok(NoteBody(input))
    }
}

/// `application/json` or any `application/*+json` media type.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// The raw `{id}` path segment of a note route.
///
/// Parsing is deferred to [`NoteKey::id`] so handlers can validate the body
/// first. A segment that is not an integer can never match a row and is
/// reported as not found.
#[derive(Debug, Clone)]
pub struct NoteKey(pub String);

impl NoteKey {
    pub fn id(&self) -> Result<DbId, AppError> {
        self.0.parse().map_err(|_| AppError::InvalidId {
            entity: "Note",
            raw: self.0.clone(),
        })
    }
}

impl FromRequestParts<AppState> for NoteKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Core(CoreError::Validation(rejection.body_text())))?;
        Ok(NoteKey(raw))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn json_content_types_recognized() {
        assert!(has_json_content_type(&headers_with("application/json")));
        assert!(has_json_content_type(&headers_with(
            "application/json; charset=utf-8"
        )));
        assert!(has_json_content_type(&headers_with("application/merge-patch+json")));
    }

    #[test]
    fn other_content_types_rejected() {
        assert!(!has_json_content_type(&HeaderMap::new()));
        assert!(!has_json_content_type(&headers_with("text/plain")));
        assert!(!has_json_content_type(&headers_with(
            "application/x-www-form-urlencoded"
        )));
    }

    #[test]
    fn numeric_key_parses() {
        assert_eq!(NoteKey("42".into()).id().unwrap(), 42);
    }

    #[test]
    fn non_numeric_key_is_not_found() {
        let err = NoteKey("abc".into()).id().unwrap_err();
        assert!(matches!(err, AppError::InvalidId { entity: "Note", .. }));
    }
}
