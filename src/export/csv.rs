use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes a generic header + rows table as UTF-8 CSV. The file opens
/// with a BOM so spreadsheet applications pick up the Arabic text.
pub(crate) fn write_csv(
    label: &str,
    headers: &[&str],
    rows: &[Vec<String>],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut file = File::create(path)?;
    file.write_all("\u{feff}".as_bytes())?;

    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(headers)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    for row in rows {
        wtr.write_record(row)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }
    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success(label, path);
    Ok(())
}
