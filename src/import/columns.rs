//! Header-row resolution against the bilingual alias table.
//!
//! Each logical column accepts several Arabic/English spellings;
//! matching is case- and whitespace-insensitive and first match wins.
//! name/phone/date are mandatory; the rest default silently.

use super::cell::Cell;
use crate::errors::{AppError, AppResult};

const NAME_ALIASES: &[&str] = &["الاسم", "name"];
const PHONE_ALIASES: &[&str] = &["رقم الجوال", "phone", "رقم جوال"];
const NATIONAL_ID_ALIASES: &[&str] = &[
    "رقم الهوية الوطنية",
    "nationalid",
    "رقم الهوية",
    "هوية وطنية",
];
const TYPE_ALIASES: &[&str] = &["النوع", "type", "نوع"];
const OPPORTUNITY_ALIASES: &[&str] = &[
    "الفرصة التطوعية",
    "opportunity",
    "فرصة تطوعية",
    "الفرصة",
];
const DATE_ALIASES: &[&str] = &["التاريخ", "date", "تاريخ"];
const TIME_ALIASES: &[&str] = &["الساعة", "time", "وقت", "ساعة"];
const DURATION_ALIASES: &[&str] = &["المدة", "duration", "مدة", "الساعات", "hours"];

/// Resolved column indices into each data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub phone: usize,
    pub date: usize,
    pub national_id: Option<usize>,
    pub kind: Option<usize>,
    pub opportunity: Option<usize>,
    pub time: Option<usize>,
    pub duration: Option<usize>,
}

fn find(headers: &[String], aliases: &[&str]) -> Option<usize> {
    for alias in aliases {
        if let Some(idx) = headers.iter().position(|h| h == alias) {
            return Some(idx);
        }
    }
    None
}

impl ColumnMap {
    /// Resolves the header row. Aborts the whole import when a mandatory
    /// column is missing, naming the missing columns by their primary
    /// (Arabic) alias.
    pub fn resolve(header_row: &[Cell]) -> AppResult<Self> {
        let headers: Vec<String> = header_row
            .iter()
            .map(|c| c.to_text().to_lowercase())
            .collect();

        let name = find(&headers, NAME_ALIASES);
        let phone = find(&headers, PHONE_ALIASES);
        let date = find(&headers, DATE_ALIASES);

        let (name, phone, date) = match (name, phone, date) {
            (Some(n), Some(p), Some(d)) => (n, p, d),
            _ => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push(NAME_ALIASES[0]);
                }
                if phone.is_none() {
                    missing.push(PHONE_ALIASES[0]);
                }
                if date.is_none() {
                    missing.push(DATE_ALIASES[0]);
                }
                return Err(AppError::MissingColumns(missing.join("، ")));
            }
        };

        Ok(Self {
            name,
            phone,
            date,
            national_id: find(&headers, NATIONAL_ID_ALIASES),
            kind: find(&headers, TYPE_ALIASES),
            opportunity: find(&headers, OPPORTUNITY_ALIASES),
            time: find(&headers, TIME_ALIASES),
            duration: find(&headers, DURATION_ALIASES),
        })
    }
}
