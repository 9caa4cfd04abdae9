pub mod dilemmas;
pub mod env_check;
pub mod export;
pub mod health;
pub mod history;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /history          GET (paginated list), POST (create), DELETE (by id)
/// /settings         GET (fetch), POST (upsert)
/// /export           GET (JSON attachment)
/// /env-check        GET (configuration probe)
/// /dilemmas         GET (catalog)
/// /dilemmas/{key}   GET (one dilemma + canned responses)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/history", history::router())
        .nest("/settings", settings::router())
        .nest("/export", export::router())
        .nest("/env-check", env_check::router())
        .nest("/dilemmas", dilemmas::router())
}
