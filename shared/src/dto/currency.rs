//! Currency, exchange-rate and conversion DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Base currency used when the caller does not name one.
pub const DEFAULT_BASE_CURRENCY: &str = "ETB";

/// Entry of `GET /currencies`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    pub code: String,
    #[serde(default)]
    pub name: String,
}

/// Body of `GET /currencies/rates`.
///
/// The rate mapping is passed through as-is; its layout belongs to the server.
pub type ExchangeRates = Value;

/// Entry of `GET /currencies/popular-rates`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PopularRate {
    pub target_currency: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_currency_detail: Option<CurrencyDetail>,
}

impl PopularRate {
    /// Human readable name of the target currency, falling back to its code.
    pub fn target_name(&self) -> &str {
        self.target_currency_detail
            .as_ref()
            .map(|detail| detail.name.as_str())
            .unwrap_or(&self.target_currency)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyDetail {
    pub name: String,
}

/// Body of `POST /currencies/convert`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
}

/// Response of `POST /currencies/convert`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub original_amount: f64,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub converted_amount: f64,
    pub from_currency: String,
    pub to_currency: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub exchange_rate: f64,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub fee: f64,
    #[serde(default)]
    pub timestamp: String,
}

impl ConversionResult {
    /// Parse the server timestamp (RFC 3339). `None` when absent or malformed.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        lib_utils::parse_utc(&self.timestamp).ok()
    }
}

/// Accept `1.5` as well as `"1.5"`: the API is not consistent about rate types.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {:?}", s))),
    }
}
