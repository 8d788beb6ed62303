//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::NaiveDate;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats an ISO date as a short weekday date, e.g. "Fri, Feb 6, 2026".
///
/// Values that are not ISO dates are passed through unchanged.
///
/// Usage in templates: `{{ event.date|long_date }}`
#[askama::filter_fn]
pub fn long_date(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_long_date(&value.to_string()))
}

fn format_long_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_or_else(
        |_| raw.to_string(),
        |date| date.format("%a, %b %-d, %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2026-02-06"), "Fri, Feb 6, 2026");
        assert_eq!(format_long_date("2026-03-12"), "Thu, Mar 12, 2026");
    }

    #[test]
    fn test_format_long_date_passthrough() {
        assert_eq!(format_long_date("TBD"), "TBD");
    }
}
