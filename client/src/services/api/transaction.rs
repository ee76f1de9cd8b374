//! # Transaction Endpoints
//!
//! Listing and creating transactions.

use reqwest::header::HeaderMap;
use reqwest::Method;
use shared::{NewTransaction, TransactionListBody, TransactionPage, TransactionRecord};

use super::client::{read_json, ApiClient};
use super::params::RequestParams;
use crate::core::error::ApiError;

/// Header some backends use to report the unpaged record count.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// List transactions.
///
/// Pagination aliases in `params` are normalized first. `None` or empty
/// params send a bare `GET /transactions`, without even a `?`.
#[tracing::instrument(skip(client, params))]
pub async fn get_transactions(
    client: &ApiClient,
    params: Option<&RequestParams>,
) -> Result<TransactionPage, ApiError> {
    let start = std::time::Instant::now();

    let mut request = client.request(Method::GET, "/transactions")?;
    if let Some(params) = params.filter(|p| !p.is_empty()) {
        let query = params.normalized().to_query_pairs();
        if !query.is_empty() {
            tracing::debug!(?query, "Listing transactions");
            request = request.query(&query);
        }
    }

    let response = client.dispatch(request).await?;
    let total_header = total_count(response.headers());
    let body: TransactionListBody = read_json(response).await?;
    let page = body.into_page(total_header);

    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        count = page.items.len(),
        total = ?page.total,
        "Transactions fetched"
    );
    Ok(page)
}

/// Create a transaction.
#[tracing::instrument(skip(client, data), fields(to = %data.to_currency))]
pub async fn create_transaction(
    client: &ApiClient,
    data: &NewTransaction,
) -> Result<TransactionRecord, ApiError> {
    let request = client.request(Method::POST, "/transactions")?.json(data);
    let record: TransactionRecord = client.fetch(request).await?;

    tracing::info!(id = %record.id, status = %record.status, "Transaction created");
    Ok(record)
}

fn total_count(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}
