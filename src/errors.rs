//! Unified application error type.
//! All modules (cli, config, pdf, core) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::models::ValidationReport;
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
    // Input preconditions
    // ---------------------------
    #[error("The file must have a .pdf extension (got: {0})")]
    NotPdf(String),

    #[error("File not found: {0}")]
    MissingFile(String),

    #[error("File too large ({0} bytes): the maximum allowed size is 100 KiB")]
    Oversize(u64),

    // ---------------------------
    // PDF extraction
    // ---------------------------
    #[error("Cannot open or read the PDF: {0}")]
    Extraction(String),

    // ---------------------------
    // Layout validation
    // ---------------------------
    #[error("The PDF does not match the expected timesheet layout\n{0}")]
    InvalidFormat(ValidationReport),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
