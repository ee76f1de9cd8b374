//! # Application Wiring
//!
//! [`App`] owns one [`Session`] and one [`ApiClient`] sharing it, which is
//! everything a UI needs:
//!
//! ```text
//! App
//!  ├── session: Arc<Session>    ◄── restored from storage on construction
//!  └── api: Arc<ApiClient>      ──► reads session token, clears it on 401
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use birr_client::{App, LogNavigator};
//!
//! # async fn run() -> birr_client::Result<()> {
//! let app = App::from_env(None, Arc::new(LogNavigator))?;
//!
//! if !app.session.is_authenticated() {
//!     let outcome = app.login("abebe@example.com", "secret").await;
//!     println!("login ok: {}", outcome.is_success());
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use shared::RegisterRequest;

use crate::config::ClientConfig;
use crate::core::error::Result;
use crate::navigation::Navigator;
use crate::services::api::ApiClient;
use crate::session::{AuthOutcome, Session};
use crate::storage::{FileStore, KeyValueStore, SafeStorage};

/// The client's composition root.
#[derive(Debug, Clone)]
pub struct App {
    pub session: Arc<Session>,
    pub api: Arc<ApiClient>,
}

impl App {
    /// Wire a client over `store` and restore the stored session.
    pub fn new(
        config: &ClientConfig,
        store: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let session = Arc::new(Session::new(SafeStorage::new(store)));
        session.initialize();

        let api = Arc::new(ApiClient::new(config, session.clone(), navigator));
        Self { session, api }
    }

    /// Configuration from the environment, session file from
    /// `BIRR_STORAGE_PATH`.
    pub fn from_env(runtime_override: Option<&str>, navigator: Arc<dyn Navigator>) -> Result<Self> {
        let config = ClientConfig::from_env(runtime_override)?;
        let store = FileStore::open(&config.storage_path)?;
        Ok(Self::new(&config, Arc::new(store), navigator))
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        self.session.login(self.api.as_ref(), email, password).await
    }

    pub async fn register(&self, user_data: RegisterRequest) -> AuthOutcome {
        self.session.register(self.api.as_ref(), user_data).await
    }

    pub fn logout(&self) {
        self.session.logout();
    }
}
