//! Route definition for the `/env-check` diagnostic probe.

use axum::routing::get;
use axum::Router;

use crate::handlers::env_check;
use crate::state::AppState;

/// Routes mounted at `/env-check`.
///
/// ```text
/// GET / -> env_check
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(env_check::env_check))
}
