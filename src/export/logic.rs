use crate::core::filter::{FilterCriteria, sort_for_display};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::{
    KPI_HEADERS, KPI_HEADERS_LATIN, RECORD_HEADERS, RECORD_HEADERS_LATIN, kpi_rows, record_row,
    record_row_latin,
};
use crate::export::pdf::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::record::AttendanceRecord;
use crate::ui::messages::warning;
use crate::utils::formatting::Numerals;
use std::io;
use std::path::Path;

/// High-level export dispatch.
pub struct ExportLogic;

impl ExportLogic {
    /// Exports the filtered view of `records` to `file`.
    ///
    /// - `kpi = false`: the 12-column record table, check-in descending.
    /// - `kpi = true`: the per-category KPI summary; only CSV and PDF
    ///   carry this table.
    pub fn export(
        records: &[AttendanceRecord],
        criteria: &FilterCriteria,
        format: ExportFormat,
        file: &str,
        kpi: bool,
        program_days: u32,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let mut view = criteria.apply(records);
        sort_for_display(&mut view);

        if view.is_empty() {
            warning("No records found for the selected filters.");
            return Ok(());
        }

        if kpi {
            return match format {
                ExportFormat::Csv => {
                    let rows = kpi_rows(&view, program_days, false);
                    write_csv("KPI CSV", &KPI_HEADERS, &rows, path)
                }
                ExportFormat::Pdf => {
                    let rows = kpi_rows(&view, program_days, true);
                    export_pdf("KPI analytics", &KPI_HEADERS_LATIN, &rows, false, path)
                }
                other => Err(AppError::InvalidExportFormat(format!(
                    "KPI export supports csv or pdf, not {}",
                    other.as_str()
                ))),
            };
        }

        match format {
            ExportFormat::Csv => {
                let rows: Vec<Vec<String>> = view
                    .iter()
                    .map(|r| record_row(r, Numerals::ArabicIndic))
                    .collect();
                write_csv("CSV", &RECORD_HEADERS, &rows, path)
            }
            ExportFormat::Json => export_json(&view, path),
            ExportFormat::Xlsx => {
                let rows: Vec<Vec<String>> = view
                    .iter()
                    .map(|r| record_row(r, Numerals::ArabicIndic))
                    .collect();
                export_xlsx(&RECORD_HEADERS, &rows, path)
            }
            ExportFormat::Pdf => {
                let rows: Vec<Vec<String>> =
                    view.iter().map(|r| record_row_latin(r)).collect();
                export_pdf(
                    "Attendance records",
                    &RECORD_HEADERS_LATIN,
                    &rows,
                    true,
                    path,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::city::City;
    use crate::models::participant::ParticipantType;
    use chrono::{Duration, TimeZone, Utc};

    fn rec(id: i64) -> AttendanceRecord {
        let check_in = Utc.with_ymd_and_hms(2025, 3, 10, 6, 0, 0).unwrap();
        AttendanceRecord {
            id,
            city: City::Riyadh,
            name: "سارة".into(),
            phone: "0512345678".into(),
            participant: ParticipantType::Trainee,
            opportunity: String::new(),
            national_id: String::new(),
            check_in,
            check_out: Some(check_in + Duration::hours(4)),
            notes: String::new(),
            is_imported: false,
        }
    }

    #[test]
    fn relative_output_path_is_rejected() {
        let data = vec![rec(1)];
        let err = ExportLogic::export(
            &data,
            &FilterCriteria::default(),
            ExportFormat::Csv,
            "out.csv",
            false,
            180,
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("absolute"));
    }

    #[test]
    fn kpi_export_rejects_xlsx_and_json() {
        let data = vec![rec(1)];
        let path = std::env::temp_dir().join("kpi_reject_test.xlsx");
        let err = ExportLogic::export(
            &data,
            &FilterCriteria::default(),
            ExportFormat::Xlsx,
            path.to_str().unwrap(),
            true,
            180,
            true,
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidExportFormat(_)));
    }

    #[test]
    fn record_csv_contains_arabic_indic_dates() {
        let data = vec![rec(1)];
        let path = std::env::temp_dir().join("export_logic_csv_test.csv");
        ExportLogic::export(
            &data,
            &FilterCriteria::default(),
            ExportFormat::Csv,
            path.to_str().unwrap(),
            false,
            180,
            true,
        )
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("الفرع"));
        assert!(text.contains("٢٠٢٥"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn kpi_csv_has_one_row_per_category() {
        let data = vec![rec(1)];
        let path = std::env::temp_dir().join("export_logic_kpi_test.csv");
        ExportLogic::export(
            &data,
            &FilterCriteria::default(),
            ExportFormat::Csv,
            path.to_str().unwrap(),
            true,
            180,
            true,
        )
        .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("الفئة"));
        assert!(text.contains("المتدربين"));
        assert_eq!(text.lines().count(), 4);
        std::fs::remove_file(&path).ok();
    }
}
