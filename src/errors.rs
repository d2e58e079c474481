//! Unified application error type.
//! The store, the config layer and the CLI all return AppError so errors
//! surface to `main` in a single shape.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unable to resolve the user data directory (no home directory)")]
    DataDir,

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Decoding errors
    // ---------------------------
    #[error("failed to parse {field} time: {value:?}: {reason}")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid task classification: {0}")]
    InvalidClassification(String),

    // ---------------------------
    // Config / output
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // CLI preconditions
    // ---------------------------
    #[error("{0}")]
    State(String),
}

impl AppError {
    /// True when the error is SQLite rejecting a duplicate identifier.
    /// The primary key is the only constraint on either table.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            AppError::Db(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
