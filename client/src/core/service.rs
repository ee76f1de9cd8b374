//! # Service Traits
//!
//! Traits for dependency injection, so the session holder and UI glue can be
//! tested against mocks instead of a live server.

use async_trait::async_trait;
use shared::{
    AuthResponse, ConversionResult, Currency, ExchangeRates, LoginRequest, NewTransaction,
    PopularRate, RegisterRequest, TransactionPage, TransactionRecord,
};

use crate::core::error::ApiError;
use crate::services::api::RequestParams;

/// Authentication endpoints.
///
/// [`crate::session::Session`] only needs this half of the API, which keeps
/// its mocks small.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, credentials: LoginRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/register`
    async fn register(&self, user_data: RegisterRequest) -> Result<AuthResponse, ApiError>;
}

/// Currency and transaction endpoints.
#[async_trait]
pub trait ExchangeService: Send + Sync {
    /// `GET /currencies`
    async fn get_currencies(&self) -> Result<Vec<Currency>, ApiError>;

    /// `GET /currencies/rates?base=<code>`; `None` means ETB.
    async fn get_exchange_rates(&self, base: Option<&str>) -> Result<ExchangeRates, ApiError>;

    /// `GET /currencies/popular-rates`
    async fn get_popular_rates(&self) -> Result<Vec<PopularRate>, ApiError>;

    /// `POST /currencies/convert`; `from = None` means ETB.
    async fn convert_currency(
        &self,
        amount: f64,
        from: Option<&str>,
        to: &str,
    ) -> Result<ConversionResult, ApiError>;

    /// `GET /transactions`, with pagination aliases normalized.
    async fn get_transactions(
        &self,
        params: Option<RequestParams>,
    ) -> Result<TransactionPage, ApiError>;

    /// `POST /transactions`
    async fn create_transaction(&self, data: NewTransaction)
        -> Result<TransactionRecord, ApiError>;
}
