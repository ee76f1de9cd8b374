//! # Core Abstractions
//!
//! Error types and service traits shared by every layer of the client.
//!
//! ## Modules
//!
//! - **[`error`]**: `ApiError`, `StorageError`, `ConfigError` and the umbrella `AppError`
//! - **[`service`]**: Service traits for dependency injection (`AuthService`, `ExchangeService`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use birr_client::core::service::AuthService;
//!
//! // In production: the HTTP pipeline
//! let api: Arc<dyn AuthService> = app.api.clone();
//!
//! // In tests: a mock returning canned responses
//! let api: Arc<dyn AuthService> = Arc::new(MockAuthService::default());
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, AppError, ConfigError, Result, StorageError};
pub use service::{AuthService, ExchangeService};
