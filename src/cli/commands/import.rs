use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::import::ImportLogic;
use crate::store::AttendanceStore;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Import historical attendance from a CSV or XLSX file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, city } = cmd {
        let city = super::resolve_city(city, cfg)?;

        let mut store = AttendanceStore::open(&cfg.database)?;
        let report = ImportLogic::run(&mut store, Path::new(file), city)?;

        for w in &report.warnings {
            warning(w);
        }
        success(format!("تم استيراد {} سجل بنجاح", report.imported));
        if report.skipped > 0 {
            warning(format!("{} row(s) skipped", report.skipped));
        }
    }
    Ok(())
}
