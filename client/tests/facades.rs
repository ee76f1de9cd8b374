//! # Endpoint Facade Tests
//!
//! What each currency and transaction call puts on the wire and how the
//! response comes back.

mod common;

use std::collections::HashMap;

use birr_client::services::api::{currency, transaction};
use birr_client::{ExchangeService, RequestParams};
use common::{single_request, spawn_app, spawn_signed_in_app};
use serde_json::json;
use shared::NewTransaction;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn query_map(request: &wiremock::Request) -> HashMap<String, String> {
    request.url.query_pairs().into_owned().collect()
}

#[tokio::test]
async fn test_transactions_pagination_aliases_normalized() {
    // Arrange
    let t = spawn_signed_in_app().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&t.server)
        .await;

    let params = RequestParams::new().with("pageNumber", 2).with("perPage", 5);

    // Act
    let page = transaction::get_transactions(&t.app.api, Some(&params))
        .await
        .unwrap();

    // Assert: exactly the canonical pair, no aliases
    assert!(page.items.is_empty());
    let query = query_map(&single_request(&t.server).await);
    assert_eq!(query.len(), 2);
    assert_eq!(query.get("page").map(String::as_str), Some("2"));
    assert_eq!(query.get("limit").map(String::as_str), Some("5"));
}

#[tokio::test]
async fn test_transactions_canonical_key_beats_alias() {
    let t = spawn_signed_in_app().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&t.server)
        .await;

    let params = RequestParams::new()
        .with("page", 3)
        .with("pageIndex", 9)
        .with("status", "completed");

    transaction::get_transactions(&t.app.api, Some(&params))
        .await
        .unwrap();

    let query = query_map(&single_request(&t.server).await);
    assert_eq!(query.len(), 2);
    assert_eq!(query.get("page").map(String::as_str), Some("3"));
    assert_eq!(query.get("status").map(String::as_str), Some("completed"));
}

#[tokio::test]
async fn test_transactions_without_params_send_no_query() {
    let t = spawn_signed_in_app().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&t.server)
        .await;

    transaction::get_transactions(&t.app.api, None).await.unwrap();
    transaction::get_transactions(&t.app.api, Some(&RequestParams::new()))
        .await
        .unwrap();

    let requests = t.server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for request in requests {
        assert_eq!(request.url.query(), None);
    }
}

#[tokio::test]
async fn test_transactions_total_from_header() {
    let t = spawn_signed_in_app().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-total-count", "42")
                .set_body_json(json!([
                    { "id": "tx-1", "amount": 100.0, "toCurrency": "USD", "rate": 0.018, "status": "completed" },
                    { "_id": "tx-2", "value": 50, "targetCurrency": "EUR", "state": "failed" }
                ])),
        )
        .mount(&t.server)
        .await;

    let page = transaction::get_transactions(&t.app.api, None).await.unwrap();

    assert_eq!(page.total, Some(42));
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id, "tx-1");
    assert_eq!(page.items[0].rate, Some(0.018));
    assert_eq!(page.items[1].id, "tx-2");
    assert_eq!(page.items[1].amount, 50.0);
    assert_eq!(page.items[1].to_currency, "EUR");
    assert_eq!(page.items[1].status, "failed");
}

#[tokio::test]
async fn test_transactions_envelope_body() {
    let t = spawn_signed_in_app().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": 7, "amount": 10 }],
            "meta": { "total": 31 }
        })))
        .mount(&t.server)
        .await;

    let page = transaction::get_transactions(&t.app.api, None).await.unwrap();

    assert_eq!(page.total, Some(31));
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "7");
    assert_eq!(page.items[0].status, "pending");
}

#[tokio::test]
async fn test_create_transaction_posts_body() {
    // Arrange
    let t = spawn_signed_in_app().await;
    Mock::given(method("POST"))
        .and(path("/api/transactions"))
        .and(body_json(json!({
            "fromCurrency": "ETB",
            "toCurrency": "USD",
            "amount": 250.0,
            "type": "conversion"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "transactionId": "tx-99",
            "etbAmount": 250.0,
            "currencyTo": "USD",
            "exchangeRate": 0.0175,
            "status": "pending"
        })))
        .expect(1)
        .mount(&t.server)
        .await;

    let data = NewTransaction {
        from_currency: "ETB".to_string(),
        to_currency: "USD".to_string(),
        amount: 250.0,
        kind: Some("conversion".to_string()),
    };

    // Act
    let record = transaction::create_transaction(&t.app.api, &data).await.unwrap();

    // Assert
    assert_eq!(record.id, "tx-99");
    assert_eq!(record.amount, 250.0);
    assert_eq!(record.to_currency, "USD");
    assert_eq!(record.rate, Some(0.0175));
    assert_eq!(record.raw["etbAmount"], json!(250.0));
}

#[tokio::test]
async fn test_exchange_rates_default_base() {
    let t = spawn_app(&[]).await;
    Mock::given(method("GET"))
        .and(path("/api/currencies/rates"))
        .and(query_param("base", "ETB"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "USD": 0.0175, "EUR": 0.016 })))
        .expect(1)
        .mount(&t.server)
        .await;

    let rates = currency::get_exchange_rates(&t.app.api, None).await.unwrap();

    assert_eq!(rates["USD"], json!(0.0175));
}

#[tokio::test]
async fn test_exchange_rates_explicit_base() {
    let t = spawn_app(&[]).await;
    Mock::given(method("GET"))
        .and(path("/api/currencies/rates"))
        .and(query_param("base", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ETB": 57.1 })))
        .expect(1)
        .mount(&t.server)
        .await;

    let rates = currency::get_exchange_rates(&t.app.api, Some("USD")).await.unwrap();

    assert_eq!(rates["ETB"], json!(57.1));
}

#[tokio::test]
async fn test_popular_rates() {
    let t = spawn_app(&[]).await;
    Mock::given(method("GET"))
        .and(path("/api/currencies/popular-rates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "targetCurrency": "USD", "rate": "0.0175", "targetCurrencyDetail": { "name": "US Dollar" } },
            { "targetCurrency": "GBP", "rate": 0.0138 }
        ])))
        .mount(&t.server)
        .await;

    let rates = currency::get_popular_rates(&t.app.api).await.unwrap();

    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0].rate, 0.0175);
    assert_eq!(rates[0].target_name(), "US Dollar");
    assert_eq!(rates[1].target_name(), "GBP");
}

#[tokio::test]
async fn test_convert_currency_defaults_from_to_etb() {
    // Arrange
    let t = spawn_signed_in_app().await;
    Mock::given(method("POST"))
        .and(path("/api/currencies/convert"))
        .and(body_json(json!({ "amount": 1000.0, "fromCurrency": "ETB", "toCurrency": "USD" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "originalAmount": 1000.0,
            "convertedAmount": 17.5,
            "fromCurrency": "ETB",
            "toCurrency": "USD",
            "exchangeRate": 0.0175,
            "fee": 0.5,
            "timestamp": "2024-03-01T10:00:00Z"
        })))
        .expect(1)
        .mount(&t.server)
        .await;

    // Act
    let result = currency::convert_currency(&t.app.api, 1000.0, None, "USD")
        .await
        .unwrap();

    // Assert
    assert_eq!(result.converted_amount, 17.5);
    assert_eq!(result.fee, 0.5);
    assert!(result.timestamp_utc().is_some());
}

#[tokio::test]
async fn test_exchange_service_trait_object() {
    let t = spawn_signed_in_app().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "tx-1" }])))
        .expect(1)
        .mount(&t.server)
        .await;

    let service: &dyn ExchangeService = t.app.api.as_ref();
    let params = RequestParams::new().with("pageSize", 20);
    let page = service.get_transactions(Some(params)).await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, None);
}
