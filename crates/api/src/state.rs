use std::sync::Arc;

use aletheia_store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store
/// handle is injected here at startup -- handlers never construct their
/// own client -- so tests can swap in a fake.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the external store (or the in-memory fallback).
    pub store: Arc<dyn Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
