use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckinLogic;
use crate::errors::AppResult;
use crate::models::participant::{ParticipantType, VOLUNTEER_OPPORTUNITIES};
use crate::store::{AttendanceStore, NewRecord};
use crate::ui::messages::{info, success};
use crate::utils::formatting::{Numerals, format_time};

/// Record a check-in for a participant.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin {
        name,
        phone,
        kind,
        city,
        opportunity,
        national_id,
    } = cmd
    {
        let city = super::resolve_city(city, cfg)?;
        let participant: ParticipantType = kind.parse()?;

        if participant == ParticipantType::Volunteer && opportunity.is_none() {
            info(format!(
                "الفرص التطوعية المتاحة: {}",
                VOLUNTEER_OPPORTUNITIES.join("، ")
            ));
        }

        let mut store = AttendanceStore::open(&cfg.database)?;
        let record = CheckinLogic::apply(
            &mut store,
            NewRecord {
                city,
                name: name.clone(),
                phone: phone.clone(),
                participant,
                opportunity: opportunity.clone().unwrap_or_default(),
                national_id: national_id.clone().unwrap_or_default(),
            },
        )?;

        success(format!(
            "تم تسجيل الحضور بنجاح: {} (#{}) — {} {}",
            record.name,
            record.id,
            record.city,
            format_time(&record.check_in, Numerals::Ascii),
        ));
    }
    Ok(())
}
