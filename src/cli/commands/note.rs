use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::AttendanceStore;
use crate::ui::messages::success;

/// Set or replace the notes of a record. A missing id is a silent no-op,
/// matching the inline-edit behavior of the dashboard table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Note { id, text } = cmd {
        let mut store = AttendanceStore::open(&cfg.database)?;
        store.update_notes(*id, text)?;
        success(format!("Notes updated for record {id}"));
    }
    Ok(())
}
