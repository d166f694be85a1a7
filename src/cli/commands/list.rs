use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::sort_for_display;
use crate::errors::AppResult;
use crate::models::record::AttendanceRecord;
use crate::store::AttendanceStore;
use crate::ui::messages::info;
use crate::utils::formatting::{Numerals, duration_label, format_date, format_time};
use crate::utils::table::Table;

/// List attendance records. Imported history stays hidden in the default
/// view; it appears once a filter is active or `--all` is passed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        city,
        phone,
        from,
        to,
        category,
        all,
    } = cmd
    {
        let criteria = super::build_criteria(city, phone, from, to, category)?;
        let store = AttendanceStore::open(&cfg.database)?;

        let mut view = criteria.apply(&store.records);
        if !criteria.is_active() && !all {
            view.retain(|r| !r.is_imported);
        }
        sort_for_display(&mut view);

        if view.is_empty() {
            info("No records to show.");
            return Ok(());
        }

        let mut table = Table::new(
            ["id", "الفرع", "الاسم", "الجوال", "النوع", "التاريخ", "دخول", "خروج", "المدة", "ملاحظات"]
                .into_iter()
                .map(String::from)
                .collect(),
        );
        for rec in &view {
            table.add_row(row(rec));
        }
        println!("{}", table.render());
        info(format!("{} record(s)", view.len()));
    }
    Ok(())
}

fn row(rec: &AttendanceRecord) -> Vec<String> {
    vec![
        rec.id.to_string(),
        rec.city.as_str().to_string(),
        rec.name.clone(),
        rec.phone.clone(),
        rec.participant.as_str().to_string(),
        format_date(&rec.check_in, Numerals::Ascii),
        format_time(&rec.check_in, Numerals::Ascii),
        rec.check_out
            .as_ref()
            .map(|t| format_time(t, Numerals::Ascii))
            .unwrap_or_else(|| "—".to_string()),
        duration_label(&rec.check_in, rec.check_out.as_ref(), Numerals::Ascii),
        rec.notes.clone(),
    ]
}
