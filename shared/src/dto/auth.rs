use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request.
///
/// The API accepts arbitrary user-creation fields; anything beyond the
/// known ones goes through `extra` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Authentication response (login/register success).
///
/// Both fields are optional on the wire: a response carrying a user but no
/// token is still a success.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

/// Profile of the signed-in user.
///
/// Nothing is required: a missing `email` reads as empty. Every field other
/// than `email` stays in `extra` untouched (nulls included), so the
/// persisted copy is the object the server returned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: Map::new(),
        }
    }

    /// `firstName` when the server sent a non-empty string.
    pub fn first_name(&self) -> Option<&str> {
        self.extra
            .get("firstName")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Name to greet the user with: first name when known, email otherwise.
    pub fn display_name(&self) -> &str {
        self.first_name().unwrap_or(&self.email)
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
