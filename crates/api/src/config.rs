use aletheia_store::StoreConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Store endpoint/key presence, read once at startup.
    pub store: StoreEnv,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORE_URL`            | -- (unset degrades to the in-memory store) |
    /// | `STORE_ANON_KEY`       | -- (unset degrades to the in-memory store) |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store: StoreEnv::from_env(),
        }
    }
}

/// The two store configuration values, as found in the environment.
///
/// Both are required for persistence; when either is missing the server
/// still starts, backed by the volatile in-memory store. The diagnostic
/// `/env-check` endpoint reports presence and lengths only, never the
/// values themselves.
#[derive(Debug, Clone, Default)]
pub struct StoreEnv {
    /// `STORE_URL`, trimmed; `None` when unset or blank.
    pub url: Option<String>,
    /// `STORE_ANON_KEY`, trimmed; `None` when unset or blank.
    pub anon_key: Option<String>,
}

impl StoreEnv {
    /// Read `STORE_URL` / `STORE_ANON_KEY`, treating blank values as unset.
    pub fn from_env() -> Self {
        let read = |name: &str| {
            std::env::var(name)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            url: read("STORE_URL"),
            anon_key: read("STORE_ANON_KEY"),
        }
    }

    /// The store client configuration, when both values are present.
    pub fn store_config(&self) -> Option<StoreConfig> {
        match (&self.url, &self.anon_key) {
            (Some(url), Some(anon_key)) => Some(StoreConfig {
                url: url.clone(),
                anon_key: anon_key.clone(),
            }),
            _ => None,
        }
    }

    /// Whether both configuration values are present.
    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.anon_key.is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
