//! Row types and DTOs for the two store-owned tables.
//!
//! Entity structs match the store's row shape; create/upsert DTOs are the
//! payloads the API layer sends. Ids are opaque strings assigned by the
//! store -- the application never interprets them.

use aletheia_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// A row from the `dilemmas_history` table.
///
/// Immutable once created (the only mutation path is deletion).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: String,
    pub user_id: Option<String>,
    pub dilemma_key: Option<String>,
    pub custom_text: Option<String>,
    pub utilitarian_html: Option<String>,
    pub deontologist_html: Option<String>,
    pub virtue_ethicist_html: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a history record.
///
/// Every field is individually optional; absent fields persist as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAnalysisRecord {
    pub user_id: Option<String>,
    pub dilemma_key: Option<String>,
    pub custom_text: Option<String>,
    pub utilitarian_html: Option<String>,
    pub deontologist_html: Option<String>,
    pub virtue_ethicist_html: Option<String>,
}

/// A row from the `user_settings` table (zero or one per user).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub user_id: String,
    pub notif_email: bool,
    pub notif_push: bool,
    pub notif_weekly: bool,
    pub theme: String,
    pub language: String,
    pub timezone: String,
    pub updated_at: Timestamp,
}

/// Default theme when a settings update leaves it unset.
pub const DEFAULT_THEME: &str = "dark";

/// Default locale code when a settings update leaves it unset.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Default IANA timezone when a settings update leaves it unset.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Partial settings update as received from the client.
///
/// Every field is optional; [`UserSettingsUpsert::resolve`] turns this
/// into a concrete payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    pub notif_email: Option<bool>,
    pub notif_push: Option<bool>,
    pub notif_weekly: Option<bool>,
    pub theme: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
}

/// Fully-resolved upsert payload for `user_settings`.
///
/// Defaults are applied once at the API boundary via [`Self::resolve`],
/// so every field is concrete. `updated_at` is stamped at call time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettingsUpsert {
    pub user_id: String,
    pub notif_email: bool,
    pub notif_push: bool,
    pub notif_weekly: bool,
    pub theme: String,
    pub language: String,
    pub timezone: String,
    pub updated_at: Timestamp,
}

impl UserSettingsUpsert {
    /// Resolve a partial update into a concrete payload.
    ///
    /// Unset booleans coerce to `false`; unset or blank strings fall back
    /// to their defaults.
    pub fn resolve(user_id: String, update: SettingsUpdate, updated_at: Timestamp) -> Self {
        let or_default = |value: Option<String>, default: &str| {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            user_id,
            notif_email: update.notif_email.unwrap_or(false),
            notif_push: update.notif_push.unwrap_or(false),
            notif_weekly: update.notif_weekly.unwrap_or(false),
            theme: or_default(update.theme, DEFAULT_THEME),
            language: or_default(update.language, DEFAULT_LANGUAGE),
            timezone: or_default(update.timezone, DEFAULT_TIMEZONE),
            updated_at,
        }
    }
}

/// The authenticated identity behind a bearer credential, as reported by
/// the store's identity endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthIdentity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// One page of history records plus the owner-filtered total row count.
#[derive(Debug, Clone)]
pub struct HistoryPage {
    pub items: Vec<AnalysisRecord>,
    pub total: i64,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_applies_defaults_to_empty_update() {
        let now = chrono::Utc::now();
        let payload =
            UserSettingsUpsert::resolve("u1".to_string(), SettingsUpdate::default(), now);

        assert_eq!(payload.user_id, "u1");
        assert!(!payload.notif_email);
        assert!(!payload.notif_push);
        assert!(!payload.notif_weekly);
        assert_eq!(payload.theme, "dark");
        assert_eq!(payload.language, "en-US");
        assert_eq!(payload.timezone, "UTC");
        assert_eq!(payload.updated_at, now);
    }

    #[test]
    fn resolve_keeps_explicit_values() {
        let update = SettingsUpdate {
            notif_email: Some(true),
            theme: Some("light".to_string()),
            timezone: Some("Europe/Berlin".to_string()),
            ..Default::default()
        };
        let payload = UserSettingsUpsert::resolve("u1".to_string(), update, chrono::Utc::now());

        assert!(payload.notif_email);
        assert_eq!(payload.theme, "light");
        assert_eq!(payload.timezone, "Europe/Berlin");
        assert_eq!(payload.language, "en-US");
    }

    #[test]
    fn resolve_treats_blank_strings_as_unset() {
        let update = SettingsUpdate {
            theme: Some(String::new()),
            ..Default::default()
        };
        let payload = UserSettingsUpsert::resolve("u1".to_string(), update, chrono::Utc::now());
        assert_eq!(payload.theme, "dark");
    }

    #[test]
    fn new_record_omitted_fields_deserialize_as_none() {
        let record: NewAnalysisRecord =
            serde_json::from_value(serde_json::json!({ "user_id": "u1" })).unwrap();
        assert_eq!(record.user_id.as_deref(), Some("u1"));
        assert!(record.dilemma_key.is_none());
        assert!(record.custom_text.is_none());
        assert!(record.utilitarian_html.is_none());
    }
}
