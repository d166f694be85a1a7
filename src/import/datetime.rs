//! Date and time normalization for imported rows.
//!
//! Source files mix textual dates (Arabic or ASCII digits, `/` or `-`
//! separators, day-first), spreadsheet serial numbers, and native
//! datetime cells. Times come as `HH:MM` text with optional Arabic or
//! English meridiem markers, bare hours, or day fractions. Everything
//! lands on a wall-clock `NaiveDateTime` that the pipeline converts to
//! UTC via the local timezone.

use super::cell::Cell;
use crate::utils::formatting::to_ascii_digits;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Spreadsheet serial for 1970-01-01 against the 1899-12-30 epoch.
/// Numbers at or below this are treated as plain numbers, not dates.
const SERIAL_UNIX_EPOCH: f64 = 25569.0;

const SECS_PER_DAY: f64 = 86_400.0;

/// Wall-clock time plus a day carry for hour-24 inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub secs: u32,
    pub day_carry: u32,
}

impl TimeOfDay {
    fn new(hour: u32, minute: u32, second: u32) -> Self {
        if hour >= 24 {
            TimeOfDay {
                secs: (hour - 24) * 3600 + minute * 60 + second,
                day_carry: 1,
            }
        } else {
            TimeOfDay {
                secs: hour * 3600 + minute * 60 + second,
                day_carry: 0,
            }
        }
    }
}

fn serial_epoch() -> NaiveDate {
    // Lotus epoch with the phantom 1900 leap day already folded in.
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN)
}

/// Converts a spreadsheet serial to a datetime. Only serials past the
/// Unix epoch qualify; anything earlier is far more likely a stray
/// numeric cell than an attendance date.
pub fn serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !(serial > SERIAL_UNIX_EPOCH - 1.0) || !serial.is_finite() {
        return None;
    }
    let days = serial.trunc() as i64;
    let secs = (serial.fract() * SECS_PER_DAY).round() as i64;
    let date = serial_epoch().checked_add_signed(Duration::days(days))?;
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt + Duration::seconds(secs))
}

/// Parses a textual date: `D/M/Y` or `D-M-Y` day-first, or ISO `Y-M-D`.
/// Arabic-Indic digits are transliterated first; two-digit years are
/// taken as 20xx.
pub fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let ascii = to_ascii_digits(raw.trim());
    let parts: Vec<&str> = ascii
        .split(['/', '-', '.'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 {
        return None;
    }
    let nums: Vec<u32> = parts
        .iter()
        .map(|p| p.parse::<u32>().ok())
        .collect::<Option<Vec<_>>>()?;

    let (y, m, d) = if nums[0] > 31 {
        // ISO year-first
        (nums[0], nums[1], nums[2])
    } else {
        let mut year = nums[2];
        if year < 100 {
            year += 2000;
        }
        (year, nums[1], nums[0])
    };

    NaiveDate::from_ymd_opt(y as i32, m, d)
}

/// Resolves the date column cell to a calendar date plus, for datetime
/// cells that carry one, an embedded time of day.
pub fn parse_date_cell(cell: &Cell) -> Option<(NaiveDate, Option<TimeOfDay>)> {
    match cell {
        Cell::Empty => None,
        Cell::DateTime(dt) => {
            let secs = dt.signed_duration_since(dt.date().and_hms_opt(0, 0, 0)?);
            let tod = TimeOfDay {
                secs: secs.num_seconds().max(0) as u32,
                day_carry: 0,
            };
            let embedded = if tod.secs > 0 { Some(tod) } else { None };
            Some((dt.date(), embedded))
        }
        Cell::Number(n) => serial_to_datetime(*n).map(|dt| {
            let secs = dt
                .signed_duration_since(dt.date().and_hms_opt(0, 0, 0).unwrap_or(dt))
                .num_seconds()
                .max(0) as u32;
            let embedded = if secs > 0 {
                Some(TimeOfDay { secs, day_carry: 0 })
            } else {
                None
            };
            (dt.date(), embedded)
        }),
        Cell::Text(s) => {
            // A numeric string may still be a serial date.
            let ascii = to_ascii_digits(s.trim());
            if let Ok(n) = ascii.parse::<f64>() {
                return parse_date_cell(&Cell::Number(n));
            }
            parse_date_text(s).map(|d| (d, None))
        }
    }
}

/// Parses the time column: `HH:MM[:SS]` text with an optional meridiem
/// marker (`ص`/`AM`, `م`/`PM`), a bare hour, or a numeric day fraction.
/// Hour 24 carries into the next day.
pub fn parse_time_cell(cell: &Cell) -> Option<TimeOfDay> {
    match cell {
        Cell::Empty => None,
        Cell::DateTime(dt) => {
            let secs = dt
                .signed_duration_since(dt.date().and_hms_opt(0, 0, 0)?)
                .num_seconds()
                .max(0) as u32;
            Some(TimeOfDay { secs, day_carry: 0 })
        }
        Cell::Number(n) => {
            if !n.is_finite() || *n < 0.0 {
                return None;
            }
            if n.fract() == 0.0 && (1.0..=24.0).contains(n) {
                // bare hour, 1 through 24
                Some(TimeOfDay::new(*n as u32, 0, 0))
            } else if *n <= 1.0 {
                // fraction of a day
                let total = (n * SECS_PER_DAY).round() as u32;
                Some(TimeOfDay {
                    secs: total % 86_400,
                    day_carry: total / 86_400,
                })
            } else {
                None
            }
        }
        Cell::Text(s) => parse_time_text(s),
    }
}

fn parse_time_text(raw: &str) -> Option<TimeOfDay> {
    let ascii = to_ascii_digits(raw.trim());
    if ascii.is_empty() {
        return None;
    }

    let lower = ascii.to_lowercase();
    let is_pm = lower.contains('م') || lower.contains("pm");
    let is_am = !is_pm && (lower.contains('ص') || lower.contains("am"));

    let digits: String = ascii
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ':' || *c == '.')
        .collect();
    let digits = digits.trim_matches(['.', ':']);
    if digits.is_empty() {
        return None;
    }

    let (mut hour, minute, second) = if digits.contains(':') {
        let parts: Vec<&str> = digits.split(':').collect();
        let h = parts.first()?.parse::<u32>().ok()?;
        let m = parts.get(1).and_then(|p| p.parse::<u32>().ok()).unwrap_or(0);
        let s = parts.get(2).and_then(|p| p.parse::<u32>().ok()).unwrap_or(0);
        (h, m, s)
    } else if let Ok(n) = digits.parse::<f64>() {
        if n < 0.0 || n >= 25.0 {
            return None;
        }
        let h = n.trunc() as u32;
        let m = ((n.fract() * 60.0).round() as u32).min(59);
        (h, m, 0)
    } else {
        return None;
    };

    if minute > 59 || second > 59 || hour > 24 {
        return None;
    }

    if is_pm && hour < 12 {
        hour += 12;
    } else if is_am && hour == 12 {
        hour = 0;
    }

    Some(TimeOfDay::new(hour, minute, second))
}

/// Combines a date with a wall-clock time into a single naive datetime,
/// applying any hour-24 day carry.
pub fn combine(date: NaiveDate, time: TimeOfDay) -> Option<NaiveDateTime> {
    let date = date.checked_add_signed(Duration::days(time.day_carry as i64))?;
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt + Duration::seconds(time.secs as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn serial_conversion_anchors() {
        // 25569 is 1970-01-01 against the 1899-12-30 epoch.
        let dt = serial_to_datetime(25569.0).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());

        let dt = serial_to_datetime(45000.5).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn small_numbers_are_not_serial_dates() {
        assert!(serial_to_datetime(8.0).is_none());
        assert!(serial_to_datetime(25000.0).is_none());
        assert!(serial_to_datetime(f64::NAN).is_none());
    }

    #[test]
    fn day_first_text_dates_parse() {
        assert_eq!(
            parse_date_text("15/3/2023"),
            NaiveDate::from_ymd_opt(2023, 3, 15)
        );
        assert_eq!(
            parse_date_text("01-12-2024"),
            NaiveDate::from_ymd_opt(2024, 12, 1)
        );
        assert_eq!(
            parse_date_text("2023-03-15"),
            NaiveDate::from_ymd_opt(2023, 3, 15)
        );
    }

    #[test]
    fn arabic_indic_digits_and_short_years() {
        assert_eq!(
            parse_date_text("١٥/٣/٢٠٢٣"),
            NaiveDate::from_ymd_opt(2023, 3, 15)
        );
        assert_eq!(
            parse_date_text("5/1/24"),
            NaiveDate::from_ymd_opt(2024, 1, 5)
        );
    }

    #[test]
    fn garbage_dates_are_rejected()  {
        assert!(parse_date_text("غير معروف").is_none());
        assert!(parse_date_text("32/13/2023").is_none());
        assert!(parse_date_text("15/3").is_none());
    }

    #[test]
    fn datetime_cells_surface_their_embedded_time() {
        let dt = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let (date, tod) = parse_date_cell(&Cell::DateTime(dt)).unwrap();
        assert_eq!(date, dt.date());
        assert_eq!(tod.unwrap().secs, 9 * 3600 + 30 * 60);

        let midnight = dt.date().and_hms_opt(0, 0, 0).unwrap();
        let (_, tod) = parse_date_cell(&Cell::DateTime(midnight)).unwrap();
        assert!(tod.is_none());
    }

    #[test]
    fn numeric_strings_fall_through_to_serial() {
        let (date, _) = parse_date_cell(&Cell::Text("45000".into())).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 15).unwrap());
    }

    #[test]
    fn time_text_with_meridiem() {
        assert_eq!(parse_time_text("08:30"), Some(TimeOfDay::new(8, 30, 0)));
        assert_eq!(parse_time_text("٨:٣٠ م"), Some(TimeOfDay::new(20, 30, 0)));
        assert_eq!(parse_time_text("12:00 ص"), Some(TimeOfDay::new(0, 0, 0)));
        assert_eq!(parse_time_text("1:15 PM"), Some(TimeOfDay::new(13, 15, 0)));
        assert_eq!(parse_time_text("9"), Some(TimeOfDay::new(9, 0, 0)));
    }

    #[test]
    fn fractional_day_times() {
        assert_eq!(
            parse_time_cell(&Cell::Number(0.5)),
            Some(TimeOfDay { secs: 43_200, day_carry: 0 })
        );
        // a bare integer is an hour, not a fraction
        assert_eq!(
            parse_time_cell(&Cell::Number(1.0)),
            Some(TimeOfDay::new(1, 0, 0))
        );
        assert_eq!(
            parse_time_cell(&Cell::Number(24.0)),
            Some(TimeOfDay { secs: 0, day_carry: 1 })
        );
    }

    #[test]
    fn hour_24_rolls_into_next_day() {
        let tod = parse_time_text("24:00").unwrap();
        assert_eq!(tod.day_carry, 1);
        assert_eq!(tod.secs, 0);

        let date = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let dt = combine(date, tod).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn bad_times_are_rejected() {
        assert!(parse_time_text("25:00").is_none());
        assert!(parse_time_text("10:75").is_none());
        assert!(parse_time_text("صباحاً").is_none());
        assert!(parse_time_cell(&Cell::Number(-0.5)).is_none());
    }
}
