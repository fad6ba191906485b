//! Time related utils.

use crate::Error;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Create datetime from unix timestamp in milliseconds.
///
/// Sub-second precision is kept, but it never shows up in the formatted
/// output of [`format_date`] or [`format_iso8601`].
pub fn from_timestamp_millis(millis: i64) -> crate::Result<DateTime> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        Error::request_invalid(format!("timestamp {millis}ms is out of range"))
    })
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}
