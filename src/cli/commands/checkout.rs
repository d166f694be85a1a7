use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkout::CheckoutLogic;
use crate::errors::AppResult;
use crate::store::AttendanceStore;
use crate::ui::messages::success;
use crate::utils::formatting::{Numerals, duration_label};

/// Close today's most recent open session for a phone number.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkout { phone, city } = cmd {
        let city = super::resolve_city(city, cfg)?;

        let mut store = AttendanceStore::open(&cfg.database)?;
        let record = CheckoutLogic::apply(&mut store, phone, city)?;

        success(format!(
            "تم تسجيل الخروج بنجاح: {} (#{}) — المدة: {}",
            record.name,
            record.id,
            duration_label(&record.check_in, record.check_out.as_ref(), Numerals::Ascii),
        ));
    }
    Ok(())
}
