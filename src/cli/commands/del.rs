use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::AttendanceStore;
use crate::ui::messages::{success, warning};

/// Delete a record by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut store = AttendanceStore::open(&cfg.database)?;
        if store.delete_record(*id)? {
            success(format!("Record {id} deleted"));
        } else {
            warning(format!("Record {id} not found"));
        }
    }
    Ok(())
}
