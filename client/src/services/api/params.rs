//! # Request Parameters
//!
//! Query parameters for listing endpoints, with pagination alias handling.
//!
//! Callers spell pagination keys in several ways. Before a request leaves
//! the client they collapse to one canonical pair:
//!
//! | Canonical | Accepted spellings (precedence order) |
//! |-----------|----------------------------------------|
//! | `page`    | `page`, `pageNumber`, `pageIndex`      |
//! | `limit`   | `limit`, `perPage`, `pageSize`, `page_size` |
//!
//! When several spellings of one concept are present, the first one in the
//! table wins and the rest are dropped. Null values count as absent.
//! Unrecognized keys pass through unchanged.

use serde_json::{Map, Value};

const PAGE_ALIASES: &[&str] = &["page", "pageNumber", "pageIndex"];
const LIMIT_ALIASES: &[&str] = &["limit", "perPage", "pageSize", "page_size"];

const CANONICAL: &[(&str, &[&str])] = &[("page", PAGE_ALIASES), ("limit", LIMIT_ALIASES)];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams(Map<String, Value>);

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Collapse pagination aliases to `page` / `limit`.
    pub fn normalized(&self) -> RequestParams {
        let mut out = Map::new();

        for (canonical, aliases) in CANONICAL {
            let present: Vec<(&str, &Value)> = aliases
                .iter()
                .filter_map(|alias| {
                    self.0
                        .get(*alias)
                        .filter(|value| !value.is_null())
                        .map(|value| (*alias, value))
                })
                .collect();

            if let Some((winner, value)) = present.first() {
                if present.len() > 1 {
                    let dropped: Vec<&str> = present[1..].iter().map(|(alias, _)| *alias).collect();
                    tracing::debug!(canonical, winner, ?dropped, "Multiple pagination aliases supplied");
                }
                out.insert(canonical.to_string(), (*value).clone());
            }
        }

        for (key, value) in &self.0 {
            if !is_alias(key) && !value.is_null() {
                out.insert(key.clone(), value.clone());
            }
        }

        RequestParams(out)
    }

    /// Flatten into `key=value` pairs for the query string.
    ///
    /// Strings are sent verbatim, numbers and booleans in their JSON form,
    /// arrays as repeated keys, objects as JSON text. Nulls are skipped.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = scalar_text(item) {
                            pairs.push((key.clone(), text));
                        }
                    }
                }
                other => {
                    if let Some(text) = scalar_text(other) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
        }
        pairs
    }
}

impl From<Map<String, Value>> for RequestParams {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn is_alias(key: &str) -> bool {
    CANONICAL
        .iter()
        .any(|(_, aliases)| aliases.contains(&key))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
