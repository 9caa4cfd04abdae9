//! Store adapter for the hosted database/auth service.
//!
//! All persisted state lives in an external store that also owns
//! authentication. This crate exposes that service behind the [`Store`]
//! trait so request handlers receive an injected client instance instead
//! of reaching for a process-wide singleton: the production implementation
//! is [`HttpStore`] (REST rows + identity endpoint), and [`MemoryStore`]
//! backs both the degraded no-configuration mode and the test suites.
//!
//! The bearer credential is carried as the raw `Authorization` header
//! value (`Option<&str>`) and forwarded verbatim -- this crate never
//! inspects or decodes it; the store rejects invalid ones.

pub mod http;
pub mod memory;
pub mod models;

use async_trait::async_trait;

pub use http::{HttpStore, StoreConfig};
pub use memory::MemoryStore;
pub use models::{
    AnalysisRecord, AuthIdentity, HistoryPage, NewAnalysisRecord, SettingsUpdate, UserSettings,
    UserSettingsUpsert,
};

/// Errors from the store adapter.
///
/// The API layer does not classify causes: anything that is not a
/// validation or authentication problem surfaces as a generic operational
/// failure carrying the store's message.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store returned a non-2xx status code.
    #[error("Store error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The store responded with a body we could not interpret.
    #[error("Unexpected store response: {0}")]
    Decode(String),
}

/// Persistence facade over the external store.
///
/// Each method takes the caller's raw `Authorization` header value and
/// forwards it to the store unchanged; row-level access control is the
/// store's job, not ours.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a history record. Absent fields persist as null; the store
    /// assigns `id` and `created_at`.
    async fn create_history(
        &self,
        auth: Option<&str>,
        record: NewAnalysisRecord,
    ) -> Result<AnalysisRecord, StoreError>;

    /// List history records, `created_at` descending.
    ///
    /// `limit` and `offset` must already be clamped by the caller. When
    /// `user_id` is `None` the result spans all owners.
    async fn list_history(
        &self,
        auth: Option<&str>,
        user_id: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<HistoryPage, StoreError>;

    /// Delete at most one record by id. Unknown ids succeed silently.
    async fn delete_history(&self, auth: Option<&str>, id: &str) -> Result<(), StoreError>;

    /// All history records for one user, newest first, unpaginated.
    async fn export_history(
        &self,
        auth: Option<&str>,
        user_id: &str,
    ) -> Result<Vec<AnalysisRecord>, StoreError>;

    /// Fetch a user's settings row. An absent row is `Ok(None)`, which is
    /// distinct from a query failure.
    async fn get_settings(
        &self,
        auth: Option<&str>,
        user_id: &str,
    ) -> Result<Option<UserSettings>, StoreError>;

    /// Insert or overwrite the settings row keyed on `user_id`.
    async fn upsert_settings(
        &self,
        auth: Option<&str>,
        settings: UserSettingsUpsert,
    ) -> Result<UserSettings, StoreError>;

    /// Resolve the identity behind the bearer credential via the store's
    /// identity endpoint. `Ok(None)` when the credential is absent or
    /// rejected.
    async fn current_user(&self, auth: Option<&str>)
        -> Result<Option<AuthIdentity>, StoreError>;
}
