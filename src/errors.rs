//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database not found at {0}; run `init` first")]
    DbNotFound(String),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format '{0}' (e.g. 06:00 PM or 18:00)")]
    InvalidTimeFormat(String),

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    #[error("Invalid transport type '{0}'. Use bicycle, motorcycle, car or scooter")]
    InvalidTransport(String),

    #[error("Invalid courier type '{0}'. Use solopreneur or fleet")]
    InvalidCourierType(String),

    #[error("Invalid rent frequency '{0}'. Use daily, weekly or monthly")]
    InvalidRentFrequency(String),

    #[error("Fee percent must be between 0 and 100, got {0}")]
    InvalidFeePercent(f64),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Please select a platform (--platform ID or NAME)")]
    MissingPlatform,

    #[error("Platform not found: {0}")]
    PlatformNotFound(String),

    #[error("Platform already exists: {0}")]
    PlatformExists(String),

    #[error("Platform '{0}' is referenced by {1} session(s) and cannot be removed")]
    PlatformInUse(String, i64),

    #[error("Session not found: {0}")]
    SessionNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
