pub mod backup;
pub mod checkin;
pub mod checkout;
pub mod config;
pub mod del;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod note;
pub mod stats;

use crate::config::Config;
use crate::core::filter::FilterCriteria;
use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::participant::ParticipantType;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

/// Branch resolution shared by checkin/checkout/import: an explicit
/// `--city` wins, otherwise `default_city` from the config.
pub(crate) fn resolve_city(arg: &Option<String>, cfg: &Config) -> AppResult<City> {
    let name = arg
        .as_deref()
        .or(cfg.default_city.as_deref())
        .ok_or_else(|| {
            AppError::Validation(
                "No branch selected: pass --city or set default_city in the config".to_string(),
            )
        })?;
    name.parse()
}

pub(crate) fn parse_date_arg(arg: &Option<String>) -> AppResult<Option<NaiveDate>> {
    match arg.as_deref() {
        None => Ok(None),
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

/// Builds the shared filter set from list/stats/export flags.
pub(crate) fn build_criteria(
    city: &Option<String>,
    phone: &Option<String>,
    from: &Option<String>,
    to: &Option<String>,
    category: &Option<String>,
) -> AppResult<FilterCriteria> {
    let city = match city.as_deref() {
        None => None,
        Some(s) => Some(s.parse::<City>()?),
    };
    let category = match category.as_deref() {
        None => None,
        Some(s) => Some(s.parse::<ParticipantType>()?),
    };
    Ok(FilterCriteria {
        city,
        phone: phone.clone(),
        date_from: parse_date_arg(from)?,
        date_to: parse_date_arg(to)?,
        category,
    })
}
