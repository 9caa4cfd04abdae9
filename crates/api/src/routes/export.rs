//! Route definition for the `/export` download endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Routes mounted at `/export`.
///
/// ```text
/// GET / -> export_history
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(export::export_history))
}
