use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::category_stats;
use crate::errors::{AppError, AppResult};
use crate::models::participant::{ALL_TYPES, ParticipantType};
use crate::store::AttendanceStore;
use crate::ui::messages::header;

/// KPI dashboard, gated behind the configured admin credential list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        user,
        password,
        city,
        phone,
        from,
        to,
    } = cmd
    {
        if !cfg.is_admin(user, password) {
            return Err(AppError::AccessDenied);
        }

        let criteria = super::build_criteria(city, phone, from, to, &None)?;
        let store = AttendanceStore::open(&cfg.database)?;
        let view = criteria.apply(&store.records);

        header("لوحة التحليلات");
        println!("إجمالي السجلات: {}\n", view.len());

        for kind in ALL_TYPES {
            let stats = category_stats(&view, kind, cfg.program_days);
            header(kind.plural_label());
            println!("إجمالي الحضور:     {}", stats.total_sessions);
            println!("جلسات مكتملة:      {}", stats.completed_sessions);
            println!("الأيام:            {}", stats.unique_days);
            println!("إجمالي الساعات:    {:.1}", stats.total_hours);
            println!("متوسط الجلسة:      {:.1} ساعة", stats.avg_session_hours);
            match kind {
                ParticipantType::Volunteer => {
                    println!("نسبة الإكمال:      {}% (جلسات مكتملة)", stats.completion_rate)
                }
                _ => println!(
                    "نسبة الإكمال:      {}% (من {} يوم)",
                    stats.completion_rate, cfg.program_days
                ),
            }
            println!();
        }
    }
    Ok(())
}
