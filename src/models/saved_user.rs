use super::{participant::ParticipantType, record::AttendanceRecord};
use serde::{Deserialize, Serialize};

/// One autocomplete entry. The directory is a cache derived from the
/// record set, never a source of truth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedUser {
    pub name: String,
    pub phone: String,
}

/// Deduplicated {name, phone} directory per participant type, kept only
/// for trainees and preparatory participants. Serialized keys match the
/// legacy `savedUsers` storage blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedUsers {
    #[serde(rename = "متدرب", default)]
    pub trainee: Vec<SavedUser>,
    #[serde(rename = "تمهير", default)]
    pub preparatory: Vec<SavedUser>,
}

impl SavedUsers {
    /// Full rebuild from record history, deduplicated by phone within each
    /// type. Called once at load; later check-ins append via `remember`.
    pub fn rebuild(records: &[AttendanceRecord]) -> Self {
        let mut users = SavedUsers::default();
        for rec in records {
            users.remember(rec.participant, &rec.name, &rec.phone);
        }
        users
    }

    /// Appends the user to the bucket for `kind` unless the phone is
    /// already present. Volunteers are never saved.
    pub fn remember(&mut self, kind: ParticipantType, name: &str, phone: &str) {
        let bucket = match kind {
            ParticipantType::Trainee => &mut self.trainee,
            ParticipantType::Preparatory => &mut self.preparatory,
            ParticipantType::Volunteer => return,
        };
        if !bucket.iter().any(|u| u.phone == phone) {
            bucket.push(SavedUser {
                name: name.to_string(),
                phone: phone.to_string(),
            });
        }
    }
}
