//! # Birr Exchange Client - Library Root
//!
//! The non-visual core of the Birr currency exchange front end: session
//! persistence, the authenticated HTTP pipeline and the endpoint facades.
//! A UI layer renders [`Session`] state and calls the facades; everything
//! it needs is reachable from [`App`].
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              birr-client (this crate)                  │
//! ├────────────────────────────────────────────────────────┤
//! │  app         - Composition root (session + api)        │
//! │  session     - Who is signed in, mirrored to storage   │
//! │  storage     - Key-value backends and SafeStorage      │
//! │  services    - ApiClient pipeline and facades          │
//! │  navigation  - Login redirect seam                     │
//! │  config      - Base URL and storage path resolution    │
//! │  core        - Errors and service traits               │
//! │  debug       - tracing subscriber setup                │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (JSON, Bearer token)
//!          ▼
//! ┌─────────────────┐
//! │  Exchange API   │
//! └─────────────────┘
//! ```
//!
//! ### Module Dependency Graph
//!
//! ```text
//! app
//!   ├── session ──► storage::SafeStorage ──► KeyValueStore
//!   └── services::api::ApiClient
//!         ├── session (token read, invalidate on 401)
//!         └── navigation::Navigator (login redirect on 401)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use birr_client::{App, LogNavigator, RequestParams};
//! use birr_client::services::api::transaction;
//!
//! # async fn run() -> birr_client::Result<()> {
//! let _guard = birr_client::debug::init();
//! let app = App::from_env(None, Arc::new(LogNavigator))?;
//!
//! let params = RequestParams::new().with("pageNumber", 2).with("perPage", 5);
//! let page = transaction::get_transactions(&app.api, Some(&params)).await?;
//! println!("{} transactions", page.items.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p birr-client
//! ```
//!
//! Unit tests live next to the code; `tests/` drives the pipeline against a
//! `wiremock` server.

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod navigation;
pub mod services;
pub mod session;
pub mod storage;

pub use app::App;
pub use config::ClientConfig;
pub use core::{ApiError, AppError, AuthService, ConfigError, ExchangeService, Result, StorageError};
pub use navigation::{CountingNavigator, LogNavigator, Navigator};
pub use services::{ApiClient, RequestParams};
pub use session::{AuthOutcome, Session, SessionState};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SafeStorage};
