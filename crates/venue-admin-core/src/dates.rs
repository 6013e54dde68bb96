//! Date helpers for ISO strings coming from and going to the backend.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// Shown when a date column holds something unparseable
pub const INVALID_DATE: &str = "Fecha inválida";

/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.fff]` and plain `YYYY-MM-DD`
pub fn parse(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc().date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Table display: `dd/MM/yyyy` or [`INVALID_DATE`]
pub fn display(value: &str) -> String {
    parse(value)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Value for an `<input type="date">`; empty when unparseable
pub fn to_input(value: &str) -> String {
    parse(value)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Back from an `<input type="date">` to an ISO timestamp at UTC midnight.
/// A cleared input yields an empty string.
pub fn from_input(value: &str) -> String {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| iso(dt.and_utc()))
        .unwrap_or_default()
}

/// ISO timestamp with millisecond precision and `Z` suffix
pub fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_accepts_backend_shapes() {
        assert_eq!(display("2024-03-09T15:30:00.000Z"), "09/03/2024");
        assert_eq!(display("2024-03-09T15:30:00"), "09/03/2024");
        assert_eq!(display("2024-03-09"), "09/03/2024");
        assert_eq!(display("2024-03-09T23:30:00-05:00"), "10/03/2024");
    }

    #[test]
    fn test_display_invalid() {
        assert_eq!(display(""), INVALID_DATE);
        assert_eq!(display("mañana"), INVALID_DATE);
    }

    #[test]
    fn test_input_round_trip() {
        assert_eq!(to_input("2024-12-01T10:00:00.000Z"), "2024-12-01");
        assert_eq!(from_input("2024-12-01"), "2024-12-01T00:00:00.000Z");
        assert_eq!(from_input(""), "");
        assert_eq!(to_input("basura"), "");
    }

    #[test]
    fn test_iso_format() {
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(iso(at), "2025-01-02T03:04:05.000Z");
    }
}
