//! # Check Backend Utility
//!
//! Probes the exchange API and reports whether it answers.
//!
//! ## Usage
//!
//! ```bash
//! BIRR_API_URL=http://localhost:3000/api cargo run --package check-backend --bin check_backend
//! ```
//!
//! The program will:
//! 1. Resolve the base URL (`BIRR_API_URL`, else `http://localhost:3000/api`)
//! 2. Send `GET <base>/transactions` with a 3 second timeout
//! 3. Print the status and up to ten keys of the response body
//! 4. Exit with status 1 if the backend answered with an error or not at all

use std::process::ExitCode;
use std::time::Duration;

use birr_client::config::{resolve_base_url, API_URL_ENV, DEFAULT_LOCAL_API_URL};
use serde_json::Value;

const TIMEOUT: Duration = Duration::from_secs(3);
const SAMPLE_KEYS: usize = 10;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let configured = std::env::var(API_URL_ENV).ok();
    let base = resolve_base_url(None, configured.as_deref(), None)?
        .unwrap_or_else(|| DEFAULT_LOCAL_API_URL.to_string());

    println!("Checking backend at {}", base);

    let client = reqwest::Client::builder().timeout(TIMEOUT).build()?;
    let response = match client.get(format!("{}/transactions", base)).send().await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Error connecting to backend: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let status = response.status();
    if !status.is_success() {
        eprintln!("Backend responded with status {}", status.as_u16());
        return Ok(ExitCode::FAILURE);
    }

    println!("Status: {}", status.as_u16());

    // A non-JSON body still counts as an answer
    if let Ok(body) = response.json::<Value>().await {
        println!("Sample response keys: {:?}", sample_keys(&body));
    }

    Ok(ExitCode::SUCCESS)
}

/// Object keys, or element indices for arrays.
fn sample_keys(body: &Value) -> Vec<String> {
    match body {
        Value::Object(map) => map.keys().take(SAMPLE_KEYS).cloned().collect(),
        Value::Array(items) => (0..items.len().min(SAMPLE_KEYS)).map(|i| i.to_string()).collect(),
        _ => Vec::new(),
    }
}
