//! # API Client
//!
//! The request pipeline every endpoint goes through.
//!
//! ```text
//! facade ──► ApiClient::request()  builds the URL, attaches the bearer token
//!        ──► ApiClient::dispatch() sends once, then normalizes the response:
//!                2xx  → Ok(response)
//!                401  → Session::invalidate(), Navigator::navigate_to_login(),
//!                       Err(ApiError::Unauthorized)
//!                else → Err(ApiError::Status)
//! ```
//!
//! There is no retry, queue or backpressure: one call is one attempt and
//! its failure goes straight back to the caller.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{
    AuthResponse, ConversionResult, Currency, ErrorResponse, ExchangeRates, LoginRequest,
    NewTransaction, PopularRate, RegisterRequest, TransactionPage, TransactionRecord,
};

use super::params::RequestParams;
use crate::config::ClientConfig;
use crate::core::error::ApiError;
use crate::core::service::{AuthService, ExchangeService};
use crate::navigation::Navigator;
use crate::session::Session;

/// HTTP client for the exchange API.
///
/// Cheap to share behind an `Arc`; the inner `reqwest::Client` keeps a
/// connection pool.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: Option<String>,
    session: Arc<Session>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Build a client from resolved configuration.
    ///
    /// A missing base URL is not an error here; requests fail at call time.
    pub fn new(config: &ClientConfig, session: Arc<Session>, navigator: Arc<dyn Navigator>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to a default HTTP client");
            Client::new()
        });

        Self {
            client,
            base_url: config.base_url.clone(),
            session,
            navigator,
        }
    }

    /// API root, e.g. `http://localhost:3000/api`.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Absolute URL of `path` (which starts with `/`).
    pub(crate) fn endpoint(&self, path: &str) -> Result<String, ApiError> {
        let base = self.base_url.as_deref().ok_or(ApiError::MissingBaseUrl)?;
        let url = format!("{}{}", base, path);
        reqwest::Url::parse(&url).map_err(|e| ApiError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        Ok(url)
    }

    /// Start a request to `path` with the stored bearer token attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(path)?;
        let builder = self.client.request(method, url);
        Ok(self.authorize(builder))
    }

    /// Outgoing augmentation: `Authorization: Bearer <token>` when a token is stored.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send once and normalize the response.
    pub(crate) async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "Network error");
            ApiError::Network(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let message = error_message(response).await;

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(url = %url, "Unauthorized response, signing out");
            self.session.invalidate();
            self.navigator.navigate_to_login();
            return Err(ApiError::Unauthorized { message });
        }

        tracing::warn!(
            url = %url,
            status = status.as_u16(),
            error = message.as_deref().unwrap_or(""),
            "Request failed"
        );
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Dispatch and decode a JSON body.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.dispatch(builder).await?;
        read_json(response).await
    }
}

/// Decode a successful response body.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        tracing::error!(error = %e, "Response parse error");
        ApiError::Decode(e)
    })
}

/// Best-effort extraction of `{"error": "..."}` from a failed response.
async fn error_message(response: Response) -> Option<String> {
    let bytes = response.bytes().await.ok()?;
    serde_json::from_slice::<ErrorResponse>(&bytes)
        .ok()
        .map(|body| body.error)
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthService for ApiClient {
    async fn login(&self, credentials: LoginRequest) -> Result<AuthResponse, ApiError> {
        super::auth::login(self, &credentials).await
    }

    async fn register(&self, user_data: RegisterRequest) -> Result<AuthResponse, ApiError> {
        super::auth::register(self, &user_data).await
    }
}

#[async_trait]
impl ExchangeService for ApiClient {
    async fn get_currencies(&self) -> Result<Vec<Currency>, ApiError> {
        super::currency::get_currencies(self).await
    }

    async fn get_exchange_rates(&self, base: Option<&str>) -> Result<ExchangeRates, ApiError> {
        super::currency::get_exchange_rates(self, base).await
    }

    async fn get_popular_rates(&self) -> Result<Vec<PopularRate>, ApiError> {
        super::currency::get_popular_rates(self).await
    }

    async fn convert_currency(
        &self,
        amount: f64,
        from: Option<&str>,
        to: &str,
    ) -> Result<ConversionResult, ApiError> {
        super::currency::convert_currency(self, amount, from, to).await
    }

    async fn get_transactions(
        &self,
        params: Option<RequestParams>,
    ) -> Result<TransactionPage, ApiError> {
        super::transaction::get_transactions(self, params.as_ref()).await
    }

    async fn create_transaction(&self, data: NewTransaction) -> Result<TransactionRecord, ApiError> {
        super::transaction::create_transaction(self, &data).await
    }
}
