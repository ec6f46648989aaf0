//! Parsing helpers for dates and listing options.

use chrono::{DateTime, Utc};

use bulletin_core::query::PAGE_SIZE_OPTIONS;
use bulletin_core::storage::Timestamp;

use crate::errors::CliError;

/// Parse the same forms the store accepts for `createdAt`: RFC 3339,
/// ISO-8601 without an offset (UTC) or a bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, CliError> {
    value
        .parse::<Timestamp>()
        .map(|ts| *ts.as_datetime())
        .map_err(|_| {
            CliError::invalid_input(format!(
                "Invalid date/time (expected ISO-8601 or YYYY-MM-DD): {}",
                value
            ))
        })
}

/// Page sizes are limited to the fixed set offered by the listing.
pub fn validate_page_size(size: usize) -> Result<usize, CliError> {
    if PAGE_SIZE_OPTIONS.contains(&size) {
        return Ok(size);
    }
    let options: Vec<String> = PAGE_SIZE_OPTIONS.iter().map(|n| n.to_string()).collect();
    Err(CliError::invalid_input(format!(
        "Invalid page size: {} (expected one of: {})",
        size,
        options.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let parsed = parse_datetime("2024-03-01T12:00:00+02:00").expect("parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_plain_date() {
        let parsed = parse_datetime("2024-03-01").expect("parse");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_datetime("yesterday").is_err());
        assert!(parse_datetime("2024-13-01").is_err());
    }

    #[test]
    fn test_page_size_options() {
        for size in [5, 10, 20, 50, 100] {
            assert_eq!(validate_page_size(size).expect("valid"), size);
        }
        let err = validate_page_size(7).expect_err("invalid");
        assert!(err.to_string().contains("5, 10, 20, 50, 100"));
        assert!(validate_page_size(0).is_err());
    }
}
