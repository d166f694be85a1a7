//! Business-rule checks for check-in submissions. First failing rule
//! wins and its localized reason is returned as-is to the operator.

use crate::errors::{AppError, AppResult};
use crate::models::participant::ParticipantType;
use crate::store::NewRecord;
use regex::Regex;
use std::sync::OnceLock;

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^05\d{8}$").expect("static regex"))
}

fn national_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^1\d{9}$").expect("static regex"))
}

/// Rule order: required name/phone → volunteer opportunity → volunteer
/// national id presence → national id format → phone format.
pub fn validate_check_in(input: &NewRecord) -> AppResult<()> {
    if input.name.is_empty() || input.phone.is_empty() {
        return Err(AppError::Validation(
            "الرجاء إدخال جميع البيانات المطلوبة".to_string(),
        ));
    }

    if input.participant == ParticipantType::Volunteer {
        if input.opportunity.is_empty() {
            return Err(AppError::Validation(
                "الرجاء اختيار مسمى الفرصة التطوعية".to_string(),
            ));
        }
        if input.national_id.is_empty() {
            return Err(AppError::Validation(
                "الرجاء إدخال رقم الهوية الوطنية للمتطوع".to_string(),
            ));
        }
        if !national_id_re().is_match(&input.national_id) {
            return Err(AppError::Validation(
                "رقم الهوية الوطنية يجب أن يتكون من 10 أرقام ويبدأ بالرقم 1".to_string(),
            ));
        }
    }

    if !phone_re().is_match(&input.phone) {
        return Err(AppError::Validation(
            "رقم الجوال يجب أن يبدأ بـ 05 ويتكون من 10 أرقام".to_string(),
        ));
    }

    Ok(())
}
