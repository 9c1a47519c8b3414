//! Readiness probe: the service is only useful while SQLite answers and the
//! `notes` table is in place.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when notes can be served, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// False if the table was dropped out from under a running server.
    pub notes_table_ready: bool,
}

/// GET /health
///
/// 200 when both checks pass, 503 otherwise. The body is the same shape
/// either way.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_healthy = quicknote_db::health_check(&state.pool).await.is_ok();
    let notes_table_ready = db_healthy
        && quicknote_db::notes_table_exists(&state.pool)
            .await
            .unwrap_or(false);

    let (status_code, status) = if notes_table_ready {
        (StatusCode::OK, "ok")
    } else {
        tracing::warn!(db_healthy, notes_table_ready, "Health check degraded");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        notes_table_ready,
    };
    (status_code, Json(body))
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
