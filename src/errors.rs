//! Unified application error type.
//! All modules (store, core, import, export, cli) return AppError to keep
//! error handling consistent. User-facing failures (validation, checkout,
//! import structure) carry the localized message shown to the operator.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Storage error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // User-correctable (localized)
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("اسم المستخدم أو كلمة المرور غير صحيحة")]
    AccessDenied,

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("الملف المستورد يفتقد الأعمدة المطلوبة: {0}")]
    MissingColumns(String),

    #[error("الملف فارغ أو لا يحتوي على صفوف بيانات")]
    EmptyImport,

    #[error(
        "لم يتم العثور على بيانات صالحة في الملف. تأكد من أن الصفوف تحتوي على البيانات المطلوبة (الاسم، رقم الجوال، التاريخ) وأن التواريخ بالتنسيق الصحيح."
    )]
    NoValidRows,

    #[error("Unsupported file type: {0}")]
    UnsupportedFile(String),

    // ---------------------------
    // Parsing errors (row level)
    // ---------------------------
    #[error("Invalid date value: {0}")]
    InvalidDate(String),

    #[error("Invalid city name: {0}")]
    InvalidCity(String),

    #[error("Invalid participant type: {0}")]
    InvalidParticipantType(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
