//! # Services Module
//!
//! External service integrations. The exchange REST API is the only one.
//!
//! ```text
//! services/
//! └── api/   - Exchange API client
//!              (authentication, currencies, transactions)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Embedding UI                         │
//! │                                                         │
//! │  ┌──────────────────┐       ┌──────────────────┐        │
//! │  │  ApiClient       │──────►│  Session         │        │
//! │  │  (api/client.rs) │ token │  (session.rs)    │        │
//! │  └────────┬─────────┘ 401   └────────┬─────────┘        │
//! │           │                          │                  │
//! └───────────┼──────────────────────────┼──────────────────┘
//!             │ HTTP/JSON                │ token / user
//!             ▼                          ▼
//! ┌─────────────────────┐    ┌─────────────────────────────┐
//! │  Exchange API       │    │  Key-value storage          │
//! │  /auth/*            │    │  (storage/)                 │
//! │  /currencies/*      │    │                             │
//! │  /transactions      │    │                             │
//! └─────────────────────┘    └─────────────────────────────┘
//! ```

pub mod api;

pub use api::{ApiClient, RequestParams};
