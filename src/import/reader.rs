//! File decoders: turn a .csv or .xlsx file into rows of [`Cell`]s.
//! The extension picks the decoder; everything downstream is
//! format-agnostic.

use super::cell::Cell;
use crate::errors::{AppError, AppResult};
use calamine::{open_workbook_auto, Data, Reader};
use std::fs::File;
use std::path::Path;

pub fn read_rows(path: &Path) -> AppResult<Vec<Vec<Cell>>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => read_csv(path),
        "xlsx" | "xls" | "xlsm" => read_xlsx(path),
        other => Err(AppError::UnsupportedFile(other.to_string())),
    }
}

fn read_csv(path: &Path) -> AppResult<Vec<Vec<Cell>>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|e| AppError::Other(format!("CSV read error: {e}")))?;
        let row: Vec<Cell> = record
            .iter()
            .enumerate()
            .map(|(j, field)| {
                // Strip a UTF-8 BOM off the very first field
                let field = if i == 0 && j == 0 {
                    field.trim_start_matches('\u{feff}')
                } else {
                    field
                };
                Cell::from_text(field)
            })
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

fn read_xlsx(path: &Path) -> AppResult<Vec<Vec<Cell>>> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| AppError::Other(format!("Workbook open error: {e}")))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::Other("Workbook has no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| AppError::Other(format!("Worksheet read error: {e}")))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();
    Ok(rows)
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::from_text(s),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::from_text(if *b { "true" } else { "false" }),
        Data::DateTime(x) => x
            .as_datetime()
            .map(Cell::DateTime)
            .unwrap_or(Cell::Number(x.as_f64())),
        Data::DateTimeIso(s) => Cell::from_text(s),
        Data::DurationIso(s) => Cell::from_text(s),
        Data::Error(_) => Cell::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_csv(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn csv_rows_decode_with_bom_stripped() {
        let path = temp_csv(
            "reader_bom_test.csv",
            "\u{feff}الاسم,رقم الجوال,التاريخ\nخالد,0501234567,15/3/2023\n",
        );
        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], Cell::Text("الاسم".into()));
        assert_eq!(rows[1][1], Cell::Text("0501234567".into()));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn ragged_csv_rows_are_tolerated() {
        let path = temp_csv(
            "reader_ragged_test.csv",
            "الاسم,رقم الجوال,التاريخ\nخالد,0501234567\n",
        );
        let rows = read_rows(&path).unwrap();
        assert_eq!(rows[1].len(), 2);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = read_rows(Path::new("/tmp/data.pdf")).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFile(_)));
    }
}
