//! Diagnostic probe for the two store configuration values.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Response for `GET /env-check`.
///
/// Reports presence and lengths only -- never the configured values.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvCheckResponse {
    /// Whether persistence is fully configured.
    pub ok: bool,
    pub has_url: bool,
    pub has_key: bool,
    pub url_length: usize,
    pub key_length: usize,
}

/// GET /env-check
///
/// Cannot fail; a misconfigured server still answers 200 with the gaps.
pub async fn env_check(State(state): State<AppState>) -> Json<EnvCheckResponse> {
    let store = &state.config.store;

    Json(EnvCheckResponse {
        ok: store.is_configured(),
        has_url: store.url.is_some(),
        has_key: store.anon_key.is_some(),
        url_length: store.url.as_deref().map_or(0, str::len),
        key_length: store.anon_key.as_deref().map_or(0, str::len),
    })
}
