//! Time and timestamp helpers.

use chrono::{DateTime, ParseError, Utc};

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse an RFC 3339 string (as written by storage backends) into UTC.
///
/// # Errors
///
/// Returns [`ParseError`] when `value` is not valid RFC 3339.
pub fn parse_rfc3339(value: &str) -> Result<Timestamp, ParseError> {
    DateTime::parse_from_rfc3339(value).map(|ts| ts.to_utc())
}
