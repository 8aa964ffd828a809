//! Error types for report operations.
//!
//! This module defines [`ReportError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ReportError` for failures the caller can act on (bad config, broken probe)
//! - Use `anyhow::Error` (via `ReportError::Other`) for unexpected errors
//! - GPU probing never surfaces here; its failures are replaced by a placeholder row

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for report operations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Host platform details could not be determined.
    #[error("Unable to determine host platform: {message}")]
    HostUnavailable { message: String },

    /// The package probe ran but produced output that could not be understood.
    #[error("Package probe failed using '{interpreter}': {message}")]
    ProbeFailed {
        interpreter: String,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
