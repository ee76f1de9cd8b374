//! Transaction DTOs.
//!
//! Transaction records come back from several backend versions with
//! different field spellings, so they are decoded as raw JSON and then
//! normalized field by field ([`TransactionRecord::from_value`]).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /transactions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub from_currency: String,
    pub to_currency: String,
    pub amount: f64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Normalized transaction record.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub id: String,
    pub amount: f64,
    pub to_currency: String,
    pub rate: Option<f64>,
    pub status: String,
    /// The record exactly as the server sent it.
    pub raw: Value,
}

const ID_KEYS: &[&str] = &["id", "_id", "transactionId"];
const AMOUNT_KEYS: &[&str] = &["amount", "value", "etbAmount"];
const TO_CURRENCY_KEYS: &[&str] = &["toCurrency", "targetCurrency", "currencyTo"];
const RATE_KEYS: &[&str] = &["rate", "exchangeRate"];
const STATUS_KEYS: &[&str] = &["status", "state"];

impl TransactionRecord {
    /// Build a record from whatever shape the server returned.
    ///
    /// Missing fields fall back to `"unknown"` (id), `0` (amount),
    /// `"-"` (target currency), `None` (rate) and `"pending"` (status).
    pub fn from_value(raw: Value) -> Self {
        let id = first_present(&raw, ID_KEYS)
            .and_then(as_text)
            .unwrap_or_else(|| "unknown".to_string());
        let amount = first_present(&raw, AMOUNT_KEYS)
            .and_then(as_number)
            .unwrap_or(0.0);
        let to_currency = first_present(&raw, TO_CURRENCY_KEYS)
            .and_then(as_text)
            .unwrap_or_else(|| "-".to_string());
        let rate = first_present(&raw, RATE_KEYS).and_then(as_number);
        let status = first_present(&raw, STATUS_KEYS)
            .and_then(as_text)
            .unwrap_or_else(|| "pending".to_string());

        Self {
            id,
            amount,
            to_currency,
            rate,
            status,
            raw,
        }
    }
}

impl<'de> Deserialize<'de> for TransactionRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

impl Serialize for TransactionRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.raw.serialize(serializer)
    }
}

/// One page of `GET /transactions`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPage {
    pub items: Vec<TransactionRecord>,
    /// Total number of records on the server, when it told us.
    pub total: Option<u64>,
}

/// Body of `GET /transactions`: either a bare array or an envelope with
/// `data` and an optional `meta.total`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TransactionListBody {
    List(Vec<TransactionRecord>),
    Envelope {
        #[serde(default)]
        data: Vec<TransactionRecord>,
        #[serde(default)]
        meta: Option<ListMeta>,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMeta {
    #[serde(default)]
    pub total: Option<u64>,
}

impl TransactionListBody {
    /// Turn the body into a page; a `total_header` (`x-total-count`) wins
    /// over `meta.total`.
    pub fn into_page(self, total_header: Option<u64>) -> TransactionPage {
        let (items, meta_total) = match self {
            TransactionListBody::List(items) => (items, None),
            TransactionListBody::Envelope { data, meta } => {
                (data, meta.and_then(|meta| meta.total))
            }
        };

        TransactionPage {
            items,
            total: total_header.or(meta_total),
        }
    }
}

fn first_present<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find(|value| !value.is_null())
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
