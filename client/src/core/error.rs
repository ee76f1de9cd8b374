//! # Common Error Types
//!
//! Consolidated error handling for the client.
//!
//! ## Error Categories
//!
//! Errors are categorized by the layer that produced them:
//!
//! - **[`ApiError`]**: HTTP pipeline failures (missing base URL, network,
//!   non-success status, 401, undecodable body)
//! - **[`StorageError`]**: Key-value backend failures (I/O, corrupt file).
//!   These never cross [`crate::storage::SafeStorage`]; they only show up
//!   when a backend is used directly.
//! - **[`ConfigError`]**: Startup configuration problems
//! - **[`AppError`]**: Umbrella type for bootstrapping ([`crate::app::App::from_env`])
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use birr_client::core::error::ApiError;
//!
//! fn describe(err: &ApiError) -> String {
//!     match err.server_message() {
//!         Some(message) => message.to_string(),
//!         None => err.to_string(),
//!     }
//! }
//! ```

use thiserror::Error;

/// Failure of a single API call.
///
/// Every call is one attempt: nothing in the pipeline retries, so the variant
/// the caller sees is exactly what happened on the wire.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No base URL was configured and none could be derived.
    #[error("API base URL is not configured (set BIRR_API_URL)")]
    MissingBaseUrl,

    /// The base URL and path did not form a valid URL.
    #[error("Invalid request URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport failure: connection refused, DNS, TLS, timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered 401. The session has already been cleared and
    /// the navigator told to show the login view when this is returned.
    #[error("Unauthorized: {}", .message.as_deref().unwrap_or("authentication required"))]
    Unauthorized { message: Option<String> },

    /// Any other non-success status.
    #[error("Request failed with status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    /// The body was not the JSON shape the endpoint documents.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Message the server put in its `{"error": ...}` body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message } | ApiError::Status { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

/// Failure of a key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file exists but is not a JSON object of strings.
    #[error("Storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Invalid startup configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL {value:?}: {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("Configuration error: {0}")]
    Env(#[from] lib_utils::envs::Error),
}

/// Application-wide error type for bootstrapping the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
