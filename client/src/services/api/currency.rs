//! # Currency Endpoints
//!
//! Currency list, exchange rates and conversions. `amount` is sent as given;
//! validating it is up to the caller.

use reqwest::Method;
use shared::{
    ConversionRequest, ConversionResult, Currency, ExchangeRates, PopularRate,
    DEFAULT_BASE_CURRENCY,
};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// Get all supported currencies.
pub async fn get_currencies(client: &ApiClient) -> Result<Vec<Currency>, ApiError> {
    let request = client.request(Method::GET, "/currencies")?;
    client.fetch(request).await
}

/// Get the rate table for `base` (ETB when `None`).
#[tracing::instrument(skip(client))]
pub async fn get_exchange_rates(
    client: &ApiClient,
    base: Option<&str>,
) -> Result<ExchangeRates, ApiError> {
    let start = std::time::Instant::now();
    let base = base.unwrap_or(DEFAULT_BASE_CURRENCY);

    let request = client
        .request(Method::GET, "/currencies/rates")?
        .query(&[("base", base)]);
    let rates: ExchangeRates = client.fetch(request).await?;

    tracing::debug!(duration_ms = start.elapsed().as_millis(), "Exchange rates fetched");
    Ok(rates)
}

/// Get the rates shown on the dashboard.
pub async fn get_popular_rates(client: &ApiClient) -> Result<Vec<PopularRate>, ApiError> {
    let request = client.request(Method::GET, "/currencies/popular-rates")?;
    client.fetch(request).await
}

/// Convert `amount` from `from` (ETB when `None`) to `to`.
#[tracing::instrument(skip(client))]
pub async fn convert_currency(
    client: &ApiClient,
    amount: f64,
    from: Option<&str>,
    to: &str,
) -> Result<ConversionResult, ApiError> {
    let body = ConversionRequest {
        amount,
        from_currency: from.unwrap_or(DEFAULT_BASE_CURRENCY).to_string(),
        to_currency: to.to_string(),
    };

    let request = client
        .request(Method::POST, "/currencies/convert")?
        .json(&body);
    let result: ConversionResult = client.fetch(request).await?;

    tracing::info!(
        from = %result.from_currency,
        to = %result.to_currency,
        rate = result.exchange_rate,
        "Conversion quoted"
    );
    Ok(result)
}
