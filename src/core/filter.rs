//! Record filtering for the dashboard, list view and exports.

use crate::models::city::City;
use crate::models::participant::ParticipantType;
use crate::models::record::AttendanceRecord;
use crate::utils::date::local_date;
use chrono::NaiveDate;

/// Dashboard filter set. Every predicate is optional; the combination is
/// a pure AND. The category filter participates in `apply` but not in
/// `is_active`: on its own it does not reveal imported records in the
/// default table view.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub city: Option<City>,
    pub phone: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub category: Option<ParticipantType>,
}

impl FilterCriteria {
    pub fn is_active(&self) -> bool {
        self.city.is_some()
            || self.phone.as_deref().is_some_and(|p| !p.is_empty())
            || self.date_from.is_some()
            || self.date_to.is_some()
    }

    pub fn apply<'a>(&self, records: &'a [AttendanceRecord]) -> Vec<&'a AttendanceRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    fn matches(&self, rec: &AttendanceRecord) -> bool {
        if let Some(city) = self.city {
            if rec.city != city {
                return false;
            }
        }

        if let Some(phone) = self.phone.as_deref() {
            if !phone.is_empty() && !rec.phone.contains(phone) {
                return false;
            }
        }

        if self.date_from.is_some() || self.date_to.is_some() {
            let day = local_date(&rec.check_in);
            if let Some(from) = self.date_from {
                if day < from {
                    return false;
                }
            }
            if let Some(to) = self.date_to {
                if day > to {
                    return false;
                }
            }
        }

        if let Some(cat) = self.category {
            if rec.participant != cat {
                return false;
            }
        }

        true
    }
}

/// Display order for the record table: check-in descending, most recent
/// first. Checkout targeting depends on creation order, not on this.
pub fn sort_for_display(records: &mut [&AttendanceRecord]) {
    records.sort_by(|a, b| b.check_in.cmp(&a.check_in));
}
