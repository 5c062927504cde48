//! Unified application error type.
//! All modules (store, core, cli, export, utils) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid entry id: {0}")]
    InvalidId(String),

    #[error("Ambiguous entry id prefix: {0}")]
    AmbiguousId(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Invalid entry: {0}")]
    Validation(String),

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("Store error: {0}")]
    Store(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
