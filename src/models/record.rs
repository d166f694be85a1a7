use super::{city::City, participant::ParticipantType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One check-in event. Serialized field names match the legacy storage
/// format so an existing `attendanceData` blob round-trips unchanged.
///
/// Lifecycle: created by check-in or import; mutated only to set
/// `check_out` (checkout) or `notes` (inline edit); deleted explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub city: City,
    pub name: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub participant: ParticipantType,
    #[serde(default)]
    pub opportunity: String,
    #[serde(rename = "nationalId", default)]
    pub national_id: String,
    #[serde(rename = "checkIn")]
    pub check_in: DateTime<Utc>,
    #[serde(rename = "checkOut")]
    pub check_out: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "isImported", default)]
    pub is_imported: bool,
}

impl AttendanceRecord {
    /// Open session: check-in set, checkout still pending.
    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }

    /// Unclamped decimal hours between check-in and checkout.
    /// 0 while the session is still open.
    pub fn raw_session_hours(&self) -> f64 {
        match self.check_out {
            Some(out) => (out - self.check_in).num_milliseconds() as f64 / 3_600_000.0,
            None => 0.0,
        }
    }
}
