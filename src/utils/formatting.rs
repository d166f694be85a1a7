//! Display formatting: dates, times, durations, and numeral
//! transliteration. The business logic stays numeral-agnostic; digits are
//! only swapped at this boundary.

use chrono::{DateTime, Local, Utc};

/// Digit set used when rendering dates/times/durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numerals {
    Ascii,
    ArabicIndic,
}

const ARABIC_INDIC: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Transliterates ASCII digits to Arabic-Indic ones; everything else
/// passes through.
pub fn to_arabic_indic(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => ARABIC_INDIC[d as usize],
            _ => c,
        })
        .collect()
}

/// Transliterates Arabic-Indic (U+0660..U+0669) and Extended Arabic-Indic
/// (U+06F0..U+06F9) digits back to ASCII. Applied to string cells before
/// any numeric/date interpretation during import.
pub fn to_ascii_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            _ => c,
        })
        .collect()
}

fn apply(s: String, numerals: Numerals) -> String {
    match numerals {
        Numerals::Ascii => s,
        Numerals::ArabicIndic => to_arabic_indic(&s),
    }
}

/// DD/MM/YYYY in the viewer's local calendar.
pub fn format_date(ts: &DateTime<Utc>, numerals: Numerals) -> String {
    apply(
        ts.with_timezone(&Local).format("%d/%m/%Y").to_string(),
        numerals,
    )
}

/// HH:MM local wall-clock time.
pub fn format_time(ts: &DateTime<Utc>, numerals: Numerals) -> String {
    apply(
        ts.with_timezone(&Local).format("%H:%M").to_string(),
        numerals,
    )
}

/// Human duration label for a session. Negative deltas (clock skew) clamp
/// to zero; a closed session shorter than a minute reads "أقل من دقيقة";
/// an open session renders as a dash.
pub fn duration_label(
    check_in: &DateTime<Utc>,
    check_out: Option<&DateTime<Utc>>,
    numerals: Numerals,
) -> String {
    let Some(out) = check_out else {
        return "—".to_string();
    };

    let mut diff_ms = (*out - *check_in).num_milliseconds();
    if diff_ms < 0 {
        diff_ms = 0;
    }

    let hours = diff_ms / 3_600_000;
    let minutes = (diff_ms % 3_600_000) / 60_000;

    if hours == 0 && minutes == 0 {
        return "أقل من دقيقة".to_string();
    }

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(apply(format!("{} ساعة", hours), numerals));
    }
    if minutes > 0 {
        parts.push(apply(format!("{} دقيقة", minutes), numerals));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn digit_transliteration_round_trips() {
        assert_eq!(to_arabic_indic("05/03/2025"), "٠٥/٠٣/٢٠٢٥");
        assert_eq!(to_ascii_digits("٠٥/٠٣/٢٠٢٥"), "05/03/2025");
        // Extended (Persian/Urdu) digits also normalize.
        assert_eq!(to_ascii_digits("۱۲:۳۰"), "12:30");
        assert_eq!(to_ascii_digits("abc"), "abc");
    }

    #[test]
    fn duration_clamps_negative_to_zero() {
        let t = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let earlier = t - Duration::hours(2);
        assert_eq!(
            duration_label(&t, Some(&earlier), Numerals::Ascii),
            "أقل من دقيقة"
        );
    }

    #[test]
    fn duration_renders_hours_and_minutes() {
        let t = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        let out = t + Duration::minutes(150);
        assert_eq!(
            duration_label(&t, Some(&out), Numerals::Ascii),
            "2 ساعة 30 دقيقة"
        );
        let out = t + Duration::hours(3);
        assert_eq!(duration_label(&t, Some(&out), Numerals::Ascii), "3 ساعة");
        assert_eq!(
            duration_label(&t, Some(&out), Numerals::ArabicIndic),
            "٣ ساعة"
        );
    }

    #[test]
    fn open_session_renders_dash() {
        let t = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(duration_label(&t, None, Numerals::Ascii), "—");
    }
}
