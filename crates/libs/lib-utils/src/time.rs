//! # Time Utilities
//!
//! Timestamp helpers using chrono.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a server timestamp to UTC.
///
/// Accepts RFC3339 and the zone-less `YYYY-MM-DD HH:MM:SS` form some
/// SQL-backed servers emit (read as UTC).
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    let moment = moment.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(moment) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(moment, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
