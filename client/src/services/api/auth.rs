//! # Authentication Endpoints
//!
//! Handles user authentication (login and registration). Bodies are passed
//! through as given; storing the result is the session's job.

use reqwest::Method;
use shared::{AuthResponse, LoginRequest, RegisterRequest};

use super::client::ApiClient;
use crate::core::error::ApiError;

/// Login with email and password.
#[tracing::instrument(skip(client, credentials), fields(email = %credentials.email))]
pub async fn login(client: &ApiClient, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = client.request(Method::POST, "/auth/login")?.json(credentials);
    let result = client.fetch::<AuthResponse>(request).await;

    let duration = start.elapsed();
    match &result {
        Ok(_) => tracing::info!(duration_ms = duration.as_millis(), "Login successful"),
        Err(e) => tracing::warn!(error = %e, duration_ms = duration.as_millis(), "Login failed"),
    }
    result
}

/// Register a new user.
#[tracing::instrument(skip(client, user_data), fields(email = %user_data.email))]
pub async fn register(client: &ApiClient, user_data: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    let request = client.request(Method::POST, "/auth/register")?.json(user_data);
    let result = client.fetch::<AuthResponse>(request).await;

    if let Err(e) = &result {
        tracing::warn!(error = %e, "Registration failed");
    }
    result
}
