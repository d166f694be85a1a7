use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::record::AttendanceRecord;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Pretty-printed JSON dump in the storage field layout, usable as a
/// re-importable snapshot of the filtered view.
pub(crate) fn export_json(records: &[&AttendanceRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
