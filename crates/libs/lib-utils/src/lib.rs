//! # Utilities Library
//!
//! Shared helpers for environment variables and timestamps.

pub mod envs;
pub mod time;

// Re-export commonly used functions
pub use envs::{get_env_opt, get_env_parse_opt};
pub use time::parse_utc;
