//! Handlers for the `/settings` resource.
//!
//! Both endpoints require an authenticated session, resolved by a round
//! trip to the store's identity endpoint. Note the check is presence-only:
//! the resolved identity is NOT compared against the `user_id` argument,
//! so any authenticated caller can read or write any user's settings row
//! (subject to the store's row policy). Carried over as-is from the
//! original surface; see DESIGN.md.

use aletheia_core::error::CoreError;
use aletheia_store::{SettingsUpdate, UserSettingsUpsert};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::auth::Bearer;
use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /settings`.
#[derive(Debug, Deserialize)]
pub struct SettingsQuery {
    pub user_id: Option<String>,
}

/// Body for `POST /settings`: the target user plus a partial update.
#[derive(Debug, Deserialize)]
pub struct SettingsBody {
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub update: SettingsUpdate,
}

/// Reject the request unless the store resolves the credential to some
/// authenticated identity.
async fn require_session(state: &AppState, bearer: &Bearer) -> AppResult<()> {
    let identity = state.store.current_user(bearer.token()).await?;
    if identity.is_none() {
        return Err(CoreError::Unauthorized("Not authenticated".to_string()).into());
    }
    Ok(())
}

/// GET /settings?user_id=...
///
/// Fetch a user's settings row. A user with no row yet gets
/// `settings: null`, which is distinct from a store failure.
pub async fn get_settings(
    bearer: Bearer,
    State(state): State<AppState>,
    Query(params): Query<SettingsQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let user_id = params
        .user_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("user_id required".to_string()))?;

    require_session(&state, &bearer).await?;

    let settings = state.store.get_settings(bearer.token(), user_id).await?;

    Ok(Json(serde_json::json!({ "ok": true, "settings": settings })))
}

/// POST /settings
///
/// Create or overwrite the settings row for a user. Unset booleans coerce
/// to false and unset strings fall back to their defaults; `updated_at`
/// is stamped here. A second upsert for the same user overwrites rather
/// than duplicates.
pub async fn update_settings(
    bearer: Bearer,
    State(state): State<AppState>,
    Json(body): Json<SettingsBody>,
) -> AppResult<Json<serde_json::Value>> {
    let user_id = body
        .user_id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("user_id required".to_string()))?;

    require_session(&state, &bearer).await?;

    let payload = UserSettingsUpsert::resolve(user_id, body.update, chrono::Utc::now());
    let settings = state.store.upsert_settings(bearer.token(), payload).await?;

    Ok(Json(serde_json::json!({ "ok": true, "settings": settings })))
}
