use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::AttendanceStore;
use crate::ui::messages::success;

/// Handle the `init` command: create the config directory, write the
/// configuration file and open the storage database once so its schema
/// exists.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let cfg = Config::load();
    let db_path = cli.db.clone().unwrap_or(cfg.database);

    println!("⚙️  Initializing hudoor…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    AttendanceStore::open(&db_path)?;

    success("hudoor initialization completed");
    Ok(())
}
