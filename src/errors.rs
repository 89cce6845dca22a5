//! Unified application error type.
//! All modules (db, store, core, cli, export) return AppError to keep the error
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
    // Persistence
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Document error: {0}")]
    Document(#[from] serde_json::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Invalid logbook category: {0}")]
    InvalidCategory(String),

    // ---------------------------
    // Engine
    // ---------------------------
    #[error("Division by zero: material constant must be greater than 0")]
    DivisionByZero,

    #[error("Invalid hour index: {0}")]
    InvalidHour(usize),

    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
