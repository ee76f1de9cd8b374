//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.
//!
//! Blank values (`FOO=` or `FOO="  "`) count as missing: an empty
//! deploy-time placeholder must not shadow a later fallback.

use std::env;
use std::str::FromStr;

/// Get an optional environment variable, trimmed. `None` when unset or blank.
pub fn get_env_opt(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Parse an optional environment variable.
///
/// Unset is `Ok(None)`; set but unparsable is an error.
pub fn get_env_parse_opt<T: FromStr>(name: &'static str) -> Result<Option<T>, Error> {
    match get_env_opt(name) {
        Some(val) => val.parse::<T>().map(Some).map_err(|_| Error::WrongFormat(name)),
        None => Ok(None),
    }
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::WrongFormat(name) => write!(fmt, "environment variable {name} has the wrong format"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
