use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::record::AttendanceRecord;
use crate::store::AttendanceStore;

/// High-level business logic for the `checkout` command.
pub struct CheckoutLogic;

impl CheckoutLogic {
    pub fn apply(
        store: &mut AttendanceStore,
        phone: &str,
        city: City,
    ) -> AppResult<AttendanceRecord> {
        let phone = phone.trim();
        if phone.is_empty() {
            return Err(AppError::Validation(
                "الرجاء إدخال رقم الجوال".to_string(),
            ));
        }
        store.close_active_session(phone, city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::checkin::CheckinLogic;
    use crate::models::participant::ParticipantType;
    use crate::store::NewRecord;

    #[test]
    fn checkout_closes_session_and_second_attempt_fails() {
        let mut store = AttendanceStore::open(":memory:").unwrap();
        CheckinLogic::apply(
            &mut store,
            NewRecord {
                city: City::Riyadh,
                name: "ريم".into(),
                phone: "0512345678".into(),
                participant: ParticipantType::Volunteer,
                opportunity: "دعم تقني".into(),
                national_id: "1234567890".into(),
            },
        )
        .unwrap();

        let closed = CheckoutLogic::apply(&mut store, "0512345678", City::Riyadh).unwrap();
        assert!(closed.check_out.unwrap() >= closed.check_in);

        let err = CheckoutLogic::apply(&mut store, "0512345678", City::Riyadh).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn empty_phone_is_rejected_before_lookup() {
        let mut store = AttendanceStore::open(":memory:").unwrap();
        let err = CheckoutLogic::apply(&mut store, "  ", City::Riyadh).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
