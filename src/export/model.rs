//! Tabular shapes shared by the CSV/XLSX/PDF writers.
//!
//! The record table is the original 12-column layout with split date and
//! time columns. Arabic headers and Arabic-Indic numerals go to CSV/XLSX;
//! the PDF variant substitutes Latin labels because the embedded base-14
//! font carries no Arabic glyphs.

use crate::core::stats::category_stats;
use crate::models::participant::{ALL_TYPES, ParticipantType};
use crate::models::record::AttendanceRecord;
use crate::utils::formatting::{Numerals, duration_label, format_date, format_time};

pub(crate) const RECORD_HEADERS: [&str; 12] = [
    "الفرع",
    "الاسم",
    "رقم الجوال",
    "رقم الهوية الوطنية",
    "النوع",
    "الفرصة التطوعية",
    "تاريخ الدخول",
    "وقت الدخول",
    "تاريخ الخروج",
    "وقت الخروج",
    "المدة",
    "ملاحظات",
];

pub(crate) const RECORD_HEADERS_LATIN: [&str; 12] = [
    "Branch",
    "Name",
    "Phone",
    "National ID",
    "Type",
    "Opportunity",
    "Check-in date",
    "Check-in time",
    "Checkout date",
    "Checkout time",
    "Duration",
    "Notes",
];

pub(crate) const KPI_HEADERS: [&str; 4] =
    ["الفئة", "إجمالي الحضور", "الأيام", "إجمالي الساعات"];

pub(crate) const KPI_HEADERS_LATIN: [&str; 4] =
    ["Category", "Total sessions", "Days", "Total hours"];

/// One record as the 12-column row, Arabic labels. An open session shows
/// the pending checkout as "لم يخرج بعد" / "—".
pub(crate) fn record_row(rec: &AttendanceRecord, numerals: Numerals) -> Vec<String> {
    vec![
        rec.city.as_str().to_string(),
        rec.name.clone(),
        rec.phone.clone(),
        rec.national_id.clone(),
        rec.participant.as_str().to_string(),
        rec.opportunity.clone(),
        format_date(&rec.check_in, numerals),
        format_time(&rec.check_in, numerals),
        rec.check_out
            .as_ref()
            .map(|t| format_date(t, numerals))
            .unwrap_or_else(|| "لم يخرج بعد".to_string()),
        rec.check_out
            .as_ref()
            .map(|t| format_time(t, numerals))
            .unwrap_or_else(|| "—".to_string()),
        duration_label(&rec.check_in, rec.check_out.as_ref(), numerals),
        rec.notes.clone(),
    ]
}

/// PDF variant: Latin city/type labels, compact duration, dash for
/// volunteer-only columns of other categories. Free-text fields pass
/// through unchanged.
pub(crate) fn record_row_latin(rec: &AttendanceRecord) -> Vec<String> {
    let volunteer = rec.participant == ParticipantType::Volunteer;
    let or_dash = |s: &str| {
        if s.is_empty() {
            "-".to_string()
        } else {
            s.to_string()
        }
    };
    vec![
        rec.city.latin_name().to_string(),
        rec.name.clone(),
        rec.phone.clone(),
        if volunteer { or_dash(&rec.national_id) } else { "-".to_string() },
        rec.participant.latin_name().to_string(),
        if volunteer { or_dash(&rec.opportunity) } else { "-".to_string() },
        format_date(&rec.check_in, Numerals::Ascii),
        format_time(&rec.check_in, Numerals::Ascii),
        rec.check_out
            .as_ref()
            .map(|t| format_date(t, Numerals::Ascii))
            .unwrap_or_else(|| "open".to_string()),
        rec.check_out
            .as_ref()
            .map(|t| format_time(t, Numerals::Ascii))
            .unwrap_or_else(|| "-".to_string()),
        duration_latin(rec),
        rec.notes.clone(),
    ]
}

fn duration_latin(rec: &AttendanceRecord) -> String {
    let Some(out) = rec.check_out else {
        return "-".to_string();
    };
    let mins = (out - rec.check_in).num_minutes().max(0);
    if mins == 0 {
        return "<1m".to_string();
    }
    match (mins / 60, mins % 60) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// One KPI row per category: plural label, sessions, unique days, hours
/// to one decimal.
pub(crate) fn kpi_rows(
    records: &[&AttendanceRecord],
    program_days: u32,
    latin: bool,
) -> Vec<Vec<String>> {
    ALL_TYPES
        .iter()
        .map(|kind| {
            let stats = category_stats(records, *kind, program_days);
            let label = if latin {
                kind.latin_name().to_string()
            } else {
                kind.plural_label().to_string()
            };
            vec![
                label,
                stats.total_sessions.to_string(),
                stats.unique_days.to_string(),
                format!("{:.1}", stats.total_hours),
            ]
        })
        .collect()
}
