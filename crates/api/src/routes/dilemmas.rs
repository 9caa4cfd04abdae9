//! Route definitions for the dilemma catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::dilemmas;
use crate::state::AppState;

/// Routes mounted at `/dilemmas`.
///
/// ```text
/// GET /       -> list_dilemmas
/// GET /{key}  -> get_dilemma
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dilemmas::list_dilemmas))
        .route("/{key}", get(dilemmas::get_dilemma))
}
