//! Unified application error type.
//! Every layer (db, core, cli) returns AppError so the CLI can map the
//! failure onto an exit code in a single place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Corrupt row: {0}")]
    CorruptRow(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid range: from_ym {from} is after to_ym {to}")]
    InvalidRange { from: i64, to: i64 },

    #[error("Invalid YYYYMM value: {0}")]
    InvalidYearMonth(i64),

    #[error("Invalid month: {0} (expected 1..12)")]
    InvalidMonth(u32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Process exit code for this error.
    ///
    /// 2 = client input error, 4 = not found, 1 = everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidRange { .. }
            | AppError::InvalidYearMonth(_)
            | AppError::InvalidMonth(_)
            | AppError::InvalidInput(_) => 2,
            AppError::EmployeeNotFound(_) => 4,
            _ => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
