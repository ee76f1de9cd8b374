//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the Birr client and the exchange
//! REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration and user profile DTOs
//!   - **[`dto::currency`]**: Currency list, rates and conversion DTOs
//!   - **[`dto::transaction`]**: Transaction records and listing DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::preview`]**: Shorten secrets for log output
//!
//! ## Wire Format
//!
//! The exchange API speaks camelCase JSON:
//! - Rust fields are snake_case and renamed with `#[serde(rename_all = "camelCase")]`
//! - Optional fields are omitted from JSON when `None`
//! - Records whose shape varies between backends (transactions) are kept as
//!   raw JSON next to their normalized fields
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::auth::{LoginRequest, AuthResponse};
//!
//! let request = LoginRequest {
//!     email: "abebe@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: AuthResponse = reqwest::Client::new()
//!     .post("http://localhost:3000/api/auth/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library, everything here is public API
pub use dto::*;
pub use utils::*;
