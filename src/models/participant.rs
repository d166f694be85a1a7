use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Participant category. Drives field requirements on check-in and the
/// completion-rate formula in the stats engine.
/// Canonical stored strings are the Arabic tags; English spellings are
/// accepted on CLI/import input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParticipantType {
    #[serde(rename = "متطوع")]
    Volunteer,
    #[serde(rename = "متدرب")]
    Trainee,
    #[serde(rename = "تمهير")]
    Preparatory,
}

pub const ALL_TYPES: [ParticipantType; 3] = [
    ParticipantType::Volunteer,
    ParticipantType::Trainee,
    ParticipantType::Preparatory,
];

/// The fixed opportunity list volunteers choose from.
pub const VOLUNTEER_OPPORTUNITIES: [&str; 8] = [
    "دعم امين مكتبة",
    "دعم تقني",
    "دعم علاقات العملاء",
    "منسق فعاليات ثقافية",
    "منسق شراكات ميداني",
    "دعم مرافق",
    "مصمم جرافيك",
    "مصور فوتوغرافي",
];

impl ParticipantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantType::Volunteer => "متطوع",
            ParticipantType::Trainee => "متدرب",
            ParticipantType::Preparatory => "تمهير",
        }
    }

    /// Latin spelling, used where Arabic glyphs are unavailable (PDF).
    pub fn latin_name(&self) -> &'static str {
        match self {
            ParticipantType::Volunteer => "Volunteer",
            ParticipantType::Trainee => "Trainee",
            ParticipantType::Preparatory => "Preparatory",
        }
    }

    /// Plural Arabic label used in KPI exports and the stats dashboard.
    pub fn plural_label(&self) -> &'static str {
        match self {
            ParticipantType::Volunteer => "المتطوعين",
            ParticipantType::Trainee => "المتدربين",
            ParticipantType::Preparatory => "التمهير",
        }
    }

    /// Accepts the Arabic tag or the English spelling (case-insensitive).
    pub fn from_input(s: &str) -> Option<Self> {
        let t = s.trim();
        match t {
            "متطوع" => return Some(ParticipantType::Volunteer),
            "متدرب" => return Some(ParticipantType::Trainee),
            "تمهير" => return Some(ParticipantType::Preparatory),
            _ => {}
        }
        match t.to_ascii_lowercase().as_str() {
            "volunteer" => Some(ParticipantType::Volunteer),
            "trainee" => Some(ParticipantType::Trainee),
            "preparatory" => Some(ParticipantType::Preparatory),
            _ => None,
        }
    }
}

impl fmt::Display for ParticipantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticipantType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParticipantType::from_input(s)
            .ok_or_else(|| AppError::InvalidParticipantType(s.to_string()))
    }
}
