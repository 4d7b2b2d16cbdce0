//! Due-date conversions between the backend's ISO-8601 timestamps and the
//! browser date input's `YYYY-MM-DD` values.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

// The backend emits both offset ("…T00:00:00Z") and naive ("…T09:00:00")
// timestamps, so try RFC 3339 first and fall back to the naive form.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }
    value.parse::<NaiveDateTime>().ok()
}

/// Short label for due-date chips, e.g. "Jun 1, 2025". Unparsable values
/// are shown as-is rather than dropped.
pub fn format_short_date(value: &str) -> String {
    match parse_timestamp(value) {
        Some(parsed) => parsed.format("%b %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// Seeds the form's date input from a stored timestamp; empty when the
/// timestamp cannot be parsed.
pub fn to_date_input(value: &str) -> String {
    parse_timestamp(value)
        .map(|parsed| parsed.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Expands a date input value into the full ISO-8601 timestamp the backend
/// expects. Empty or unparsable input means "no due date".
pub fn from_date_input(value: &str) -> Option<String> {
    let date: NaiveDate = value.parse().ok()?;
    Some(format!("{}T00:00:00Z", date.format("%Y-%m-%d")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_offset_timestamps() {
        assert_eq!(format_short_date("2025-06-01T00:00:00Z"), "Jun 1, 2025");
    }

    #[test]
    fn formats_naive_timestamps() {
        assert_eq!(format_short_date("2025-12-24T09:30:00"), "Dec 24, 2025");
    }

    #[test]
    fn falls_back_to_raw_value() {
        assert_eq!(format_short_date("soon"), "soon");
    }

    #[test]
    fn seeds_date_input_from_timestamp() {
        assert_eq!(to_date_input("2025-06-01T00:00:00Z"), "2025-06-01");
        assert_eq!(to_date_input("2025-06-01T09:30:00"), "2025-06-01");
        assert_eq!(to_date_input("not a date"), "");
    }

    #[test]
    fn expands_date_input_to_timestamp() {
        assert_eq!(
            from_date_input("2025-06-01"),
            Some("2025-06-01T00:00:00Z".to_string())
        );
        assert_eq!(from_date_input(""), None);
        assert_eq!(from_date_input("tomorrow"), None);
    }
}
