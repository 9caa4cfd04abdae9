//! Handlers for the `/history` resource.
//!
//! History records are immutable once created; the only operations are
//! create, paginated list, and delete-by-id. The caller's bearer
//! credential is forwarded to the store, which enforces row access.

use aletheia_core::error::CoreError;
use aletheia_core::pagination;
use aletheia_store::NewAnalysisRecord;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::auth::Bearer;
use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /history`.
///
/// `limit` and `offset` are taken as raw strings and parsed leniently: a
/// non-numeric value falls back to the default instead of rejecting the
/// request.
#[derive(Debug, Deserialize)]
pub struct HistoryListParams {
    pub user_id: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Query parameters for `DELETE /history`.
#[derive(Debug, Deserialize)]
pub struct HistoryDeleteParams {
    pub id: Option<String>,
}

/// POST /history
///
/// Insert an analysis record. Every body field is individually optional;
/// absent fields are persisted as null. The store assigns `id` and
/// `created_at`.
pub async fn create_history(
    bearer: Bearer,
    State(state): State<AppState>,
    Json(input): Json<NewAnalysisRecord>,
) -> AppResult<Json<serde_json::Value>> {
    let item = state.store.create_history(bearer.token(), input).await?;

    Ok(Json(serde_json::json!({ "ok": true, "item": item })))
}

/// GET /history
///
/// List analysis records, newest first, with limit/offset pagination and
/// the owner-filtered total count. When `user_id` is omitted the result
/// spans all owners -- a permissive default carried over from the
/// original surface; the store's row policy is the only guard.
pub async fn list_history(
    bearer: Bearer,
    State(state): State<AppState>,
    Query(params): Query<HistoryListParams>,
) -> AppResult<Json<serde_json::Value>> {
    let limit = pagination::effective_limit(params.limit.as_deref());
    let offset = pagination::effective_offset(params.offset.as_deref());
    let user_id = params.user_id.as_deref().filter(|s| !s.is_empty());

    let page = state
        .store
        .list_history(bearer.token(), user_id, limit, offset)
        .await?;

    Ok(Json(serde_json::json!({
        "ok": true,
        "items": page.items,
        "total": page.total,
    })))
}

/// DELETE /history?id=...
///
/// Delete one record by id. A missing id is a client error; an unknown id
/// is not -- the store removes nothing and the call still succeeds.
pub async fn delete_history(
    bearer: Bearer,
    State(state): State<AppState>,
    Query(params): Query<HistoryDeleteParams>,
) -> AppResult<Json<serde_json::Value>> {
    let id = params
        .id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("id required".to_string()))?;

    state.store.delete_history(bearer.token(), id).await?;

    Ok(Json(serde_json::json!({ "ok": true })))
}
