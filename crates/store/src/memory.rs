//! In-process store implementation.
//!
//! Backs two things: the degraded mode the server falls into when the
//! store is unconfigured (history survives only for the process lifetime,
//! and with no identity endpoint every session check fails, so the system
//! is anonymous-only), and the fake injected by the test suites, where
//! sessions can be seeded up front.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    AnalysisRecord, AuthIdentity, HistoryPage, NewAnalysisRecord, UserSettings,
    UserSettingsUpsert,
};
use crate::{Store, StoreError};

#[derive(Default)]
struct Tables {
    /// Insertion-ordered; `created_at` is stamped at insert time so
    /// reverse insertion order is `created_at` descending.
    history: Vec<AnalysisRecord>,
    settings: HashMap<String, UserSettings>,
}

/// Volatile store with seedable sessions.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    /// Raw `Authorization` header value -> identity. Fixed at construction.
    sessions: HashMap<String, AuthIdentity>,
}

impl MemoryStore {
    /// An empty store with no sessions (the anonymous-only degraded mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a session: requests carrying exactly this `Authorization`
    /// header value resolve to an identity with the given user id.
    pub fn with_session(mut self, bearer: &str, user_id: &str) -> Self {
        self.sessions.insert(
            bearer.to_string(),
            AuthIdentity {
                id: user_id.to_string(),
                email: None,
            },
        );
        self
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_history(
        &self,
        _auth: Option<&str>,
        record: NewAnalysisRecord,
    ) -> Result<AnalysisRecord, StoreError> {
        let row = AnalysisRecord {
            id: Uuid::new_v4().to_string(),
            user_id: record.user_id,
            dilemma_key: record.dilemma_key,
            custom_text: record.custom_text,
            utilitarian_html: record.utilitarian_html,
            deontologist_html: record.deontologist_html,
            virtue_ethicist_html: record.virtue_ethicist_html,
            created_at: chrono::Utc::now(),
        };

        self.tables.write().await.history.push(row.clone());
        Ok(row)
    }

    async fn list_history(
        &self,
        _auth: Option<&str>,
        user_id: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<HistoryPage, StoreError> {
        let tables = self.tables.read().await;

        let matching: Vec<&AnalysisRecord> = tables
            .history
            .iter()
            .rev()
            .filter(|r| match user_id {
                Some(uid) => r.user_id.as_deref() == Some(uid),
                None => true,
            })
            .collect();

        let total = matching.len() as i64;
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(HistoryPage { items, total })
    }

    async fn delete_history(&self, _auth: Option<&str>, id: &str) -> Result<(), StoreError> {
        // Removing a missing id is not an error.
        self.tables.write().await.history.retain(|r| r.id != id);
        Ok(())
    }

    async fn export_history(
        &self,
        _auth: Option<&str>,
        user_id: &str,
    ) -> Result<Vec<AnalysisRecord>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .history
            .iter()
            .rev()
            .filter(|r| r.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn get_settings(
        &self,
        _auth: Option<&str>,
        user_id: &str,
    ) -> Result<Option<UserSettings>, StoreError> {
        Ok(self.tables.read().await.settings.get(user_id).cloned())
    }

    async fn upsert_settings(
        &self,
        _auth: Option<&str>,
        settings: UserSettingsUpsert,
    ) -> Result<UserSettings, StoreError> {
        let row = UserSettings {
            user_id: settings.user_id.clone(),
            notif_email: settings.notif_email,
            notif_push: settings.notif_push,
            notif_weekly: settings.notif_weekly,
            theme: settings.theme,
            language: settings.language,
            timezone: settings.timezone,
            updated_at: settings.updated_at,
        };

        self.tables
            .write()
            .await
            .settings
            .insert(row.user_id.clone(), row.clone());
        Ok(row)
    }

    async fn current_user(
        &self,
        auth: Option<&str>,
    ) -> Result<Option<AuthIdentity>, StoreError> {
        Ok(auth.and_then(|a| self.sessions.get(a)).cloned())
    }
}
