//! # Client Configuration
//!
//! Configuration is resolved once, when the client is built.
//!
//! ## Base URL Resolution
//!
//! In priority order:
//!
//! 1. a runtime override passed by the embedding application
//! 2. `BIRR_API_URL` (process environment, or `.env` via `dotenvy`)
//! 3. [`DEFAULT_LOCAL_API_URL`] when the client host (`BIRR_CLIENT_HOST`) is `localhost`
//! 4. unset: the client still builds, and each request fails with
//!    [`crate::core::error::ApiError::MissingBaseUrl`]
//!
//! ## Other Variables
//!
//! - `BIRR_STORAGE_PATH`: session file (default `.birr/storage.json`)
//! - `BIRR_REQUEST_TIMEOUT_MS`: optional per-request timeout; none by default

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::core::error::ConfigError;

pub const API_URL_ENV: &str = "BIRR_API_URL";
pub const CLIENT_HOST_ENV: &str = "BIRR_CLIENT_HOST";
pub const STORAGE_PATH_ENV: &str = "BIRR_STORAGE_PATH";
pub const REQUEST_TIMEOUT_ENV: &str = "BIRR_REQUEST_TIMEOUT_MS";

/// Base URL used for local development.
pub const DEFAULT_LOCAL_API_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root without trailing slash, e.g. `http://localhost:3000/api`.
    pub base_url: Option<String>,
    /// Where [`crate::storage::FileStore`] keeps the session.
    pub storage_path: PathBuf,
    /// Per-request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            storage_path: default_storage_path(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the environment.
    pub fn from_env(runtime_override: Option<&str>) -> Result<Self, ConfigError> {
        // A missing .env file is normal
        dotenvy::dotenv().ok();

        let configured = lib_utils::get_env_opt(API_URL_ENV);
        let client_host = lib_utils::get_env_opt(CLIENT_HOST_ENV);
        let base_url = resolve_base_url(
            runtime_override,
            configured.as_deref(),
            client_host.as_deref(),
        )?;

        let storage_path = lib_utils::get_env_opt(STORAGE_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_storage_path);

        let timeout = lib_utils::get_env_parse_opt::<u64>(REQUEST_TIMEOUT_ENV)?
            .map(Duration::from_millis);

        match &base_url {
            Some(url) => tracing::info!(base_url = %url, "API base URL resolved"),
            None => tracing::warn!("No API base URL configured; requests will fail"),
        }

        Ok(Self {
            base_url,
            storage_path,
            timeout,
        })
    }

    /// Configuration pointing at `base_url`, everything else default.
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Some(normalize_base_url(base_url)?),
            ..Self::default()
        })
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Pick the base URL from the available sources. Blank sources are skipped.
pub fn resolve_base_url(
    runtime_override: Option<&str>,
    configured: Option<&str>,
    client_host: Option<&str>,
) -> Result<Option<String>, ConfigError> {
    let explicit = [runtime_override, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty());

    if let Some(value) = explicit {
        return normalize_base_url(value).map(Some);
    }

    let on_localhost = client_host
        .map(|host| host.trim().eq_ignore_ascii_case("localhost"))
        .unwrap_or(false);

    Ok(on_localhost.then(|| DEFAULT_LOCAL_API_URL.to_string()))
}

/// Validate `value` as an http(s) URL and strip trailing slashes.
fn normalize_base_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    Ok(trimmed.to_string())
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".birr").join("storage.json")
}
