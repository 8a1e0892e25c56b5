//! Error types for tally operations.
//!
//! This module defines [`TallyError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TallyError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `TallyError::Other`) for unexpected errors
//! - Storage failures around the habit store are caught and logged, never
//!   surfaced to the user (see `store::HabitStore`)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tally operations.
#[derive(Debug, Error)]
pub enum TallyError {
    /// A persisted snapshot could not be parsed.
    #[error("Failed to parse snapshot for key '{key}': {message}")]
    SnapshotParse { key: String, message: String },

    /// A snapshot could not be read from durable storage.
    #[error("Failed to read snapshot at {path}: {message}")]
    StorageRead { path: PathBuf, message: String },

    /// A snapshot could not be written to durable storage.
    #[error("Failed to write snapshot at {path}: {message}")]
    StorageWrite { path: PathBuf, message: String },

    /// The habit list could not be serialized.
    #[error("Failed to serialize habit list: {message}")]
    SnapshotEncode { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;
