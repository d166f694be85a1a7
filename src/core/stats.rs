//! Derived KPI metrics per participant category.

use crate::models::participant::ParticipantType;
use crate::models::record::AttendanceRecord;
use crate::utils::date::local_date_key;
use std::collections::HashSet;

/// Aggregates for one category over an already-filtered record set.
/// `total_hours` is an unrounded float; display rounding to one decimal
/// happens at the rendering boundary only.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStats {
    pub total_sessions: usize,
    pub completed_sessions: usize,
    pub total_hours: f64,
    pub avg_session_hours: f64,
    pub unique_days: usize,
    pub completion_rate: u32,
}

/// Computes the KPI block for one category.
///
/// Completion rate:
/// - trainee/preparatory: unique attendance days against the program
///   length (default 180 days), capped at 100
/// - volunteer: completed sessions over total sessions
pub fn category_stats(
    records: &[&AttendanceRecord],
    kind: ParticipantType,
    program_days: u32,
) -> CategoryStats {
    let data: Vec<&AttendanceRecord> =
        records.iter().copied().filter(|r| r.participant == kind).collect();

    let total_sessions = data.len();
    let completed_sessions = data.iter().filter(|r| r.check_out.is_some()).count();

    let total_hours: f64 = data
        .iter()
        .filter(|r| r.check_out.is_some())
        .map(|r| r.raw_session_hours())
        .sum();

    let avg_session_hours = if completed_sessions > 0 {
        total_hours / completed_sessions as f64
    } else {
        0.0
    };

    let unique_days = data
        .iter()
        .map(|r| local_date_key(&r.check_in))
        .collect::<HashSet<_>>()
        .len();

    let completion_rate = match kind {
        ParticipantType::Trainee | ParticipantType::Preparatory => {
            let expected = program_days.max(1) as f64;
            let rate = (unique_days as f64 / expected * 100.0).round() as u32;
            rate.min(100)
        }
        ParticipantType::Volunteer => {
            if total_sessions > 0 {
                (completed_sessions as f64 / total_sessions as f64 * 100.0).round() as u32
            } else {
                0
            }
        }
    };

    CategoryStats {
        total_sessions,
        completed_sessions,
        total_hours,
        avg_session_hours,
        unique_days,
        completion_rate,
    }
}
