//! REST client for the hosted store.
//!
//! Speaks the store's two HTTP surfaces with [`reqwest`]: row operations
//! under `/rest/v1/<table>` (PostgREST conventions) and the identity check
//! under `/auth/v1/user`. One pooled client per instance; no retries, no
//! caching, no timeout policy beyond the transport's.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_RANGE};

use crate::models::{
    AnalysisRecord, AuthIdentity, HistoryPage, NewAnalysisRecord, UserSettings,
    UserSettingsUpsert,
};
use crate::{Store, StoreError};

/// The two configuration values required for any persistence to function.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the hosted service, e.g. `https://xyz.example.co`.
    pub url: String,
    /// Public (anon) API key, sent as the `apikey` header and used as the
    /// fallback credential for unauthenticated calls.
    pub anon_key: String,
}

/// History table name.
const HISTORY_TABLE: &str = "dilemmas_history";

/// Settings table name.
const SETTINGS_TABLE: &str = "user_settings";

/// HTTP client for the hosted store.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl HttpStore {
    /// Create a new store client.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a store client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across instances).
    pub fn with_client(client: reqwest::Client, config: StoreConfig) -> Self {
        Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key,
        }
    }

    // ---- private helpers ----

    /// Row endpoint URL for a table.
    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// The `Authorization` header value for a request: the caller's
    /// credential forwarded verbatim when present, the anon key otherwise.
    fn auth_value(&self, auth: Option<&str>) -> String {
        match auth {
            Some(header) => header.to_string(),
            None => format!("Bearer {}", self.anon_key),
        }
    }

    /// Attach the `apikey` and `Authorization` headers to a request.
    fn authed(
        &self,
        builder: reqwest::RequestBuilder,
        auth: Option<&str>,
    ) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, self.auth_value(auth))
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`StoreError::Api`] containing the status
    /// and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), StoreError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

/// Extract the total row count from a `Content-Range` header value.
///
/// The store reports ranges as `0-19/42` (or `*/0` for an empty set) when
/// asked for an exact count.
fn parse_content_range_total(value: &str) -> Option<i64> {
    value.rsplit('/').next()?.parse().ok()
}

#[async_trait]
impl Store for HttpStore {
    async fn create_history(
        &self,
        auth: Option<&str>,
        record: NewAnalysisRecord,
    ) -> Result<AnalysisRecord, StoreError> {
        let response = self
            .authed(self.client.post(self.rest_url(HISTORY_TABLE)), auth)
            .header("Prefer", "return=representation")
            .header(ACCEPT, "application/vnd.pgrst.object+json")
            .json(&record)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn list_history(
        &self,
        auth: Option<&str>,
        user_id: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<HistoryPage, StoreError> {
        let mut query = vec![
            ("select".to_string(), "*".to_string()),
            ("order".to_string(), "created_at.desc".to_string()),
            ("limit".to_string(), limit.to_string()),
            ("offset".to_string(), offset.to_string()),
        ];
        if let Some(user_id) = user_id {
            query.push(("user_id".to_string(), format!("eq.{user_id}")));
        }

        let response = self
            .authed(self.client.get(self.rest_url(HISTORY_TABLE)), auth)
            .header("Prefer", "count=exact")
            .query(&query)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;

        let total_header = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v: &HeaderValue| v.to_str().ok())
            .and_then(parse_content_range_total);

        let items: Vec<AnalysisRecord> = response.json().await?;

        // The store omits the count only if the Prefer header was ignored;
        // the page length is the best remaining answer.
        let total = total_header.unwrap_or(items.len() as i64);

        Ok(HistoryPage { items, total })
    }

    async fn delete_history(&self, auth: Option<&str>, id: &str) -> Result<(), StoreError> {
        let response = self
            .authed(self.client.delete(self.rest_url(HISTORY_TABLE)), auth)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;

        // The store answers 204 whether or not a row matched, which gives
        // the delete its idempotent surface.
        Self::check_status(response).await
    }

    async fn export_history(
        &self,
        auth: Option<&str>,
        user_id: &str,
    ) -> Result<Vec<AnalysisRecord>, StoreError> {
        let user_filter = format!("eq.{user_id}");
        let response = self
            .authed(self.client.get(self.rest_url(HISTORY_TABLE)), auth)
            .query(&[
                ("select", "*"),
                ("order", "created_at.desc"),
                ("user_id", user_filter.as_str()),
            ])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn get_settings(
        &self,
        auth: Option<&str>,
        user_id: &str,
    ) -> Result<Option<UserSettings>, StoreError> {
        let user_filter = format!("eq.{user_id}");
        let response = self
            .authed(self.client.get(self.rest_url(SETTINGS_TABLE)), auth)
            .query(&[("select", "*"), ("user_id", user_filter.as_str())])
            .send()
            .await?;

        let rows: Vec<UserSettings> = Self::parse_response(response).await?;
        Ok(rows.into_iter().next())
    }

    async fn upsert_settings(
        &self,
        auth: Option<&str>,
        settings: UserSettingsUpsert,
    ) -> Result<UserSettings, StoreError> {
        let response = self
            .authed(self.client.post(self.rest_url(SETTINGS_TABLE)), auth)
            .query(&[("on_conflict", "user_id")])
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .header(ACCEPT, "application/vnd.pgrst.object+json")
            .json(&settings)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn current_user(
        &self,
        auth: Option<&str>,
    ) -> Result<Option<AuthIdentity>, StoreError> {
        // No credential means no session to resolve.
        let Some(auth) = auth else {
            return Ok(None);
        };

        let response = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, auth)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Ok(None);
        }

        let identity: AuthIdentity = Self::parse_response(response).await?;
        Ok(Some(identity))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> HttpStore {
        HttpStore::new(StoreConfig {
            url: "https://store.example.test/".to_string(),
            anon_key: "anon-key".to_string(),
        })
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let s = store();
        assert_eq!(
            s.rest_url("dilemmas_history"),
            "https://store.example.test/rest/v1/dilemmas_history"
        );
    }

    #[test]
    fn auth_value_forwards_caller_credential_verbatim() {
        let s = store();
        assert_eq!(s.auth_value(Some("Bearer abc.def")), "Bearer abc.def");
    }

    #[test]
    fn auth_value_falls_back_to_anon_key() {
        let s = store();
        assert_eq!(s.auth_value(None), "Bearer anon-key");
    }

    #[test]
    fn content_range_with_count() {
        assert_eq!(parse_content_range_total("0-19/42"), Some(42));
    }

    #[test]
    fn content_range_empty_set() {
        assert_eq!(parse_content_range_total("*/0"), Some(0));
    }

    #[test]
    fn content_range_without_count() {
        assert_eq!(parse_content_range_total("0-19/*"), None);
        assert_eq!(parse_content_range_total("garbage"), None);
    }
}
