use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Program branches. Stored and displayed under their Arabic names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "الدمام")]
    Dammam,
    #[serde(rename = "الرياض")]
    Riyadh,
    #[serde(rename = "جيزان")]
    Jazan,
    #[serde(rename = "نجران")]
    Najran,
    #[serde(rename = "حايل")]
    Hail,
    #[serde(rename = "احد رفيده")]
    AhadRafidah,
    #[serde(rename = "بريدة")]
    Buraydah,
    #[serde(rename = "سكاكا")]
    Sakaka,
}

pub const ALL_CITIES: [City; 8] = [
    City::Dammam,
    City::Riyadh,
    City::Jazan,
    City::Najran,
    City::Hail,
    City::AhadRafidah,
    City::Buraydah,
    City::Sakaka,
];

impl City {
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Dammam => "الدمام",
            City::Riyadh => "الرياض",
            City::Jazan => "جيزان",
            City::Najran => "نجران",
            City::Hail => "حايل",
            City::AhadRafidah => "احد رفيده",
            City::Buraydah => "بريدة",
            City::Sakaka => "سكاكا",
        }
    }

    /// Latin spelling, used where Arabic glyphs are unavailable (PDF).
    pub fn latin_name(&self) -> &'static str {
        match self {
            City::Dammam => "Dammam",
            City::Riyadh => "Riyadh",
            City::Jazan => "Jazan",
            City::Najran => "Najran",
            City::Hail => "Hail",
            City::AhadRafidah => "Ahad Rafidah",
            City::Buraydah => "Buraydah",
            City::Sakaka => "Sakaka",
        }
    }

    /// Accepts the Arabic name or the Latin spelling (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let t = name.trim();
        ALL_CITIES.iter().copied().find(|c| {
            c.as_str() == t || c.latin_name().eq_ignore_ascii_case(t)
        })
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::from_name(s).ok_or_else(|| AppError::InvalidCity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_round_trips_through_name() {
        for c in ALL_CITIES {
            assert_eq!(City::from_name(c.as_str()), Some(c));
        }
    }

    #[test]
    fn latin_spellings_are_accepted_on_input() {
        assert_eq!(City::from_name("riyadh"), Some(City::Riyadh));
        assert_eq!(City::from_name("Ahad Rafidah"), Some(City::AhadRafidah));
    }

    #[test]
    fn unknown_city_is_rejected() {
        assert!(City::from_name("جدة").is_none());
        assert!("".parse::<City>().is_err());
    }
}
