use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::AttendanceStore;

/// Export attendance data or KPI analytics.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        kpi,
        city,
        phone,
        from,
        to,
        category,
        force,
    } = cmd
    {
        let criteria = super::build_criteria(city, phone, from, to, category)?;
        let store = AttendanceStore::open(&cfg.database)?;

        ExportLogic::export(
            &store.records,
            &criteria,
            format.clone(),
            file,
            *kpi,
            cfg.program_days,
            *force,
        )?;
    }
    Ok(())
}
