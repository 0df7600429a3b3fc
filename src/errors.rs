//! Unified application error type.
//! All modules (core, sink, cli, utils) return AppError to keep the error
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
    // Sink-related
    // ---------------------------
    #[error("Sheet write error: {0}")]
    Sheet(#[from] csv::Error),

    #[error("Sheet write failed after {0} attempts, check connectivity")]
    SheetExhausted(u32),

    // ---------------------------
    // Sign-in validation
    // ---------------------------
    #[error("Enter a valid course number: {0}")]
    InvalidCourse(String),

    #[error("TA name is required")]
    MissingTaName,

    #[error("TA name must be a single word: {0}")]
    MultiWordTaName(String),

    // ---------------------------
    // Swipe errors
    // ---------------------------
    #[error("cannot interpret input as ID or netID")]
    UnreadableSwipe,

    #[error("Session expired after {0} hours, sign in again")]
    StaleSession(i64),

    #[error("No TA is signed in")]
    NotSignedIn,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
