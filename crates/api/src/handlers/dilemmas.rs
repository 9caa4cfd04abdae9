//! Handlers for the dilemma catalog.
//!
//! The catalog is compiled-in read-only data; these endpoints exist so
//! clients can render the scenario list and the three canned perspective
//! responses without shipping the table themselves.

use aletheia_core::catalog;
use aletheia_core::error::CoreError;
use axum::extract::Path;
use axum::Json;

use crate::error::AppResult;

/// GET /dilemmas
///
/// List the built-in dilemmas in display order.
pub async fn list_dilemmas() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "ok": true,
        "dilemmas": catalog::DILEMMAS,
    }))
}

/// GET /dilemmas/{key}
///
/// One dilemma plus its canned responses. Unknown keys are a 404; the
/// `custom` response set is not addressable here since it has no scenario
/// text of its own.
pub async fn get_dilemma(Path(key): Path<String>) -> AppResult<Json<serde_json::Value>> {
    let dilemma = catalog::dilemma(&key)
        .ok_or_else(|| CoreError::NotFound(format!("unknown dilemma '{key}'")))?;
    let responses = catalog::responses(&key)
        .ok_or_else(|| CoreError::NotFound(format!("unknown dilemma '{key}'")))?;

    Ok(Json(serde_json::json!({
        "ok": true,
        "dilemma": dilemma,
        "responses": responses,
    })))
}
