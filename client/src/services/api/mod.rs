//! # Exchange API Client Module
//!
//! HTTP client for the currency exchange REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient: URL building, bearer token, 401 handling
//! ├── params.rs       - RequestParams and pagination alias normalization
//! ├── auth.rs         - Authentication endpoints (login, register)
//! ├── currency.rs     - Currency endpoints (list, rates, popular rates, convert)
//! └── transaction.rs  - Transaction endpoints (list, create)
//! ```

pub mod auth;
pub mod client;
pub mod currency;
pub mod params;
pub mod transaction;

pub use client::ApiClient;
pub use params::RequestParams;
pub use transaction::TOTAL_COUNT_HEADER;
