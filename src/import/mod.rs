//! Bulk import of historical attendance from heterogeneous CSV/XLSX
//! exports. Rows are normalized into closed sessions, staged, and
//! committed in one batch: a structural failure (missing columns, no
//! valid rows) leaves the store untouched.

pub mod cell;
pub mod columns;
pub mod datetime;
pub mod reader;

use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::participant::ParticipantType;
use crate::models::record::AttendanceRecord;
use crate::store::AttendanceStore;
use crate::utils::formatting::to_ascii_digits;
use cell::{row_is_blank, Cell};
use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use columns::ColumnMap;
use datetime::TimeOfDay;
use std::path::Path;

const DEFAULT_DURATION_HOURS: f64 = 8.0;
const DEFAULT_CHECK_IN: TimeOfDay = TimeOfDay {
    secs: 8 * 3600,
    day_carry: 0,
};
const OPPORTUNITY_FALLBACK: &str = "غير محدد";

#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub warnings: Vec<String>,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Reads `path`, normalizes every data row, and commits the valid
    /// ones to `store` under `city`. Row-level problems skip the row and
    /// land in the report; file-level problems abort with no writes.
    pub fn run(store: &mut AttendanceStore, path: &Path, city: City) -> AppResult<ImportReport> {
        let rows = reader::read_rows(path)?;
        if rows.len() < 2 {
            return Err(AppError::EmptyImport);
        }

        let map = ColumnMap::resolve(&rows[0])?;
        let mut report = ImportReport::default();
        let mut staged = Vec::new();

        for (idx, row) in rows.iter().enumerate().skip(1) {
            if row_is_blank(row) {
                continue;
            }
            let line = idx + 1;
            match normalize_row(row, &map, city) {
                Ok(rec) => staged.push(rec),
                Err(reason) => {
                    report.skipped += 1;
                    report.warnings.push(format!("Row {line} skipped: {reason}"));
                }
            }
        }

        if staged.is_empty() {
            return Err(AppError::NoValidRows);
        }

        for rec in &staged {
            store
                .saved_users
                .remember(rec.participant, &rec.name, &rec.phone);
        }
        report.imported = staged.len();
        store.append_imported(staged)?;
        Ok(report)
    }
}

fn cell_at<'a>(row: &'a [Cell], idx: usize) -> &'a Cell {
    row.get(idx).unwrap_or(&Cell::Empty)
}

fn text_at(row: &[Cell], idx: Option<usize>) -> String {
    idx.map(|i| cell_at(row, i).to_text()).unwrap_or_default()
}

/// One row to one closed session. Errors here are row-skip reasons, not
/// user-facing failures.
fn normalize_row(row: &[Cell], map: &ColumnMap, city: City) -> Result<AttendanceRecord, String> {
    let name = cell_at(row, map.name).to_text();
    let phone = to_ascii_digits(&cell_at(row, map.phone).to_text());
    let date_cell = cell_at(row, map.date);

    if name.is_empty() || phone.is_empty() || date_cell.is_empty() {
        return Err("missing name, phone, or date".to_string());
    }

    let (date, embedded_time) =
        datetime::parse_date_cell(date_cell).ok_or_else(|| "unreadable date".to_string())?;

    // Explicit time column wins over a time embedded in the date cell.
    let time = map
        .time
        .and_then(|i| datetime::parse_time_cell(cell_at(row, i)))
        .or(embedded_time)
        .unwrap_or(DEFAULT_CHECK_IN);

    let naive = datetime::combine(date, time).ok_or_else(|| "date out of range".to_string())?;
    let check_in = local_to_utc(naive);

    let duration = parse_duration(&text_at(row, map.duration));
    let check_out = check_in + Duration::seconds((duration * 3600.0).round() as i64);

    // Unrecognized category strings default to volunteer.
    let participant = ParticipantType::from_input(&text_at(row, map.kind))
        .unwrap_or(ParticipantType::Volunteer);

    let mut opportunity = text_at(row, map.opportunity);
    if opportunity.is_empty() {
        opportunity = OPPORTUNITY_FALLBACK.to_string();
    }

    Ok(AttendanceRecord {
        id: 0, // assigned on commit
        city,
        name,
        phone,
        participant,
        opportunity,
        national_id: to_ascii_digits(&text_at(row, map.national_id)),
        check_in,
        check_out: Some(check_out),
        notes: format!("تم الاستيراد من ملف ({} ساعة)", format_hours(duration)),
        is_imported: true,
    })
}

fn parse_duration(raw: &str) -> f64 {
    to_ascii_digits(raw)
        .replace('،', "")
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d > 0.0)
        .unwrap_or(DEFAULT_DURATION_HOURS)
}

fn format_hours(d: f64) -> String {
    if d.fract() == 0.0 {
        format!("{}", d as i64)
    } else {
        format!("{d}")
    }
}

/// Wall-clock to UTC. DST gaps take the earliest valid instant; a naive
/// fallback keeps pathological zones from dropping the row.
fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    match chrono::Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => Utc.from_utc_datetime(&naive),
    }
}
