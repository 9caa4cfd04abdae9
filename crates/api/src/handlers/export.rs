//! Handler for the `/export` download endpoint.

use aletheia_core::error::CoreError;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::auth::Bearer;
use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /export`.
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    pub user_id: Option<String>,
}

/// GET /export?user_id=...
///
/// Download every history record for one user as a pretty-printed JSON
/// attachment, newest first. No pagination: the full set is buffered into
/// one response.
pub async fn export_history(
    bearer: Bearer,
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> AppResult<Response> {
    let user_id = params
        .user_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("user_id required".to_string()))?;

    let items = state.store.export_history(bearer.token(), user_id).await?;

    let body = serde_json::to_string_pretty(&serde_json::json!({
        "ok": true,
        "items": items,
    }))
    .map_err(|e| CoreError::Internal(e.to_string()))?;

    let response = Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header(
            "Content-Disposition",
            format!("attachment; filename=aletheia-export-{user_id}.json"),
        )
        .body(Body::from(body))
        .map_err(|e| CoreError::Internal(e.to_string()))?;

    Ok(response.into_response())
}
