use chrono::{DateTime, Local, NaiveDate, Utc};

/// Local calendar-day key (YYYY-MM-DD) for a stored instant. "Same day"
/// is a local wall-clock concept even though instants are stored in UTC.
pub fn local_date_key(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Local calendar date of a stored instant.
pub fn local_date(ts: &DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_key() -> String {
    today().format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Key for "same day" grouping from an already-rendered date string.
/// Unparseable input yields the empty sentinel so callers can filter it
/// out instead of handling an error.
pub fn date_key_from_str(s: &str) -> String {
    match parse_date(s.trim()) {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_key_uses_local_calendar() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let expected = ts.with_timezone(&Local).format("%Y-%m-%d").to_string();
        assert_eq!(local_date_key(&ts), expected);
    }

    #[test]
    fn invalid_date_string_yields_empty_sentinel() {
        assert_eq!(date_key_from_str("15/06/2025"), "");
        assert_eq!(date_key_from_str(""), "");
        assert_eq!(date_key_from_str("2025-06-15"), "2025-06-15");
    }
}
