//! Unified application error type.
//! All modules (core, store, export, commands) return AppError to keep the
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
    // Account errors
    // ---------------------------
    #[error("Duplicate user: {0}")]
    DuplicateUser(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Credentials do not match: {0}")]
    CredentialMismatch(String),

    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("An open session already exists for user '{0}'")]
    AlreadyOpen(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    // ---------------------------
    // Authorization
    // ---------------------------
    #[error("Forbidden: {0}")]
    Forbidden(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("No attendance records to export")]
    NothingToExport,

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Persistence errors
    // ---------------------------
    #[error("Persistence error: {0}")]
    Persistence(String),
}

pub type AppResult<T> = Result<T, AppError>;
