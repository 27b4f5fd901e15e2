//! Unified application error type.
//! All modules (core, cli, config, utils) return AppError to keep the error
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
    // Data source
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { column: String, file: String },

    #[error("Invalid timestamp '{value}' at data row {row}: {reason}")]
    Timestamp {
        row: usize,
        value: String,
        reason: String,
    },

    #[error("Invalid trip duration '{value}' at data row {row}")]
    Duration { row: usize, value: String },

    // ---------------------------
    // Input / selection
    // ---------------------------
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
