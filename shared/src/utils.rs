//! # Shared Utility Functions
//!
//! ## Secret Previews
//!
//! Tokens must never reach the logs in full. [`preview`] keeps the first
//! few characters so two sessions can still be told apart:
//!
//! ```rust
//! use shared::utils::preview;
//!
//! assert_eq!(preview("eyJhbGciOiJIUzI1NiJ9.payload", 8), "eyJhbGci...");
//! assert_eq!(preview("short", 8), "short");
//! ```

/// Show the first `prefix_len` characters of `secret` followed by `...`.
///
/// Values no longer than `prefix_len` are returned as-is.
pub fn preview(secret: &str, prefix_len: usize) -> String {
    // Character-based so multi-byte input never splits inside a code point
    match secret.char_indices().nth(prefix_len) {
        Some((cut, _)) => format!("{}...", &secret[..cut]),
        None => secret.to_string(),
    }
}

/// [`preview`] with the 8-character prefix used for bearer tokens.
pub fn token_preview(token: &str) -> String {
    preview(token, 8)
}
