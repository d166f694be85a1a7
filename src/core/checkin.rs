use crate::core::validate::validate_check_in;
use crate::errors::AppResult;
use crate::models::participant::ParticipantType;
use crate::models::record::AttendanceRecord;
use crate::store::{AttendanceStore, NewRecord};

/// High-level business logic for the `checkin` command.
pub struct CheckinLogic;

impl CheckinLogic {
    /// Validates the submission, saves trainee/preparatory users for
    /// autocomplete, then creates and persists the record.
    pub fn apply(store: &mut AttendanceStore, mut input: NewRecord) -> AppResult<AttendanceRecord> {
        input.name = input.name.trim().to_string();
        input.phone = input.phone.trim().to_string();
        input.national_id = input.national_id.trim().to_string();

        // opportunity/nationalId are populated only for volunteers
        if input.participant != ParticipantType::Volunteer {
            input.opportunity.clear();
            input.national_id.clear();
        }

        validate_check_in(&input)?;

        store
            .saved_users
            .remember(input.participant, &input.name, &input.phone);

        store.create_record(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::city::City;

    fn store() -> AttendanceStore {
        AttendanceStore::open(":memory:").unwrap()
    }

    fn input(kind: ParticipantType) -> NewRecord {
        NewRecord {
            city: City::Riyadh,
            name: "ريم".into(),
            phone: "0512345678".into(),
            participant: kind,
            opportunity: "دعم تقني".into(),
            national_id: "1234567890".into(),
        }
    }

    #[test]
    fn invalid_phone_creates_no_record() {
        let mut store = store();
        let mut bad = input(ParticipantType::Volunteer);
        bad.phone = "123456".into();
        let err = CheckinLogic::apply(&mut store, bad).unwrap_err();
        assert!(err.to_string().contains("رقم الجوال"));
        assert!(store.records.is_empty());
    }

    #[test]
    fn trainee_checkin_is_saved_for_autocomplete() {
        let mut store = store();
        CheckinLogic::apply(&mut store, input(ParticipantType::Trainee)).unwrap();
        assert_eq!(store.saved_users.trainee.len(), 1);
        // Volunteer fields were dropped for a non-volunteer
        assert!(store.records[0].opportunity.is_empty());
        assert!(store.records[0].national_id.is_empty());
    }

    #[test]
    fn volunteer_is_not_saved_for_autocomplete() {
        let mut store = store();
        CheckinLogic::apply(&mut store, input(ParticipantType::Volunteer)).unwrap();
        assert!(store.saved_users.trainee.is_empty());
        assert!(store.saved_users.preparatory.is_empty());
        assert_eq!(store.records[0].opportunity, "دعم تقني");
    }

    #[test]
    fn stacked_checkins_same_day_are_allowed() {
        let mut store = store();
        CheckinLogic::apply(&mut store, input(ParticipantType::Trainee)).unwrap();
        CheckinLogic::apply(&mut store, input(ParticipantType::Trainee)).unwrap();
        assert_eq!(store.records.len(), 2);
        assert!(store.records.iter().all(|r| r.is_open()));
    }
}
