//! Error types for pacsort operations.
//!
//! This module defines [`PacsortError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Failures reading the package manager are fatal and abort the run
//! - Store errors carry the offending path so the user can inspect the file
//! - Use `anyhow::Error` (via `PacsortError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pacsort operations.
#[derive(Debug, Error)]
pub enum PacsortError {
    /// The package manager could not be queried.
    #[error("Failed to query installed packages with '{command}': {message}")]
    PackageQuery { command: String, message: String },

    /// The package manager produced output we could not understand.
    #[error("Unexpected package data for '{package}': {message}")]
    InvalidQueryOutput { package: String, message: String },

    /// A size string such as "12.5 MiB" could not be parsed.
    #[error("Invalid size: {value}")]
    InvalidSize { value: String },

    /// The classification store exists but could not be parsed.
    #[error("Failed to parse package store at {path}: {message}")]
    StoreParse { path: PathBuf, message: String },

    /// The classification store could not be serialized.
    #[error("Failed to serialize package store: {message}")]
    StoreSerialize { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pacsort operations.
pub type Result<T> = std::result::Result<T, PacsortError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_query_displays_command_and_message() {
        let err = PacsortError::PackageQuery {
            command: "pacman -Qi".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pacman -Qi"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn invalid_query_output_displays_package() {
        let err = PacsortError::InvalidQueryOutput {
            package: "glibc".into(),
            message: "bad size".into(),
        };
        assert!(err.to_string().contains("glibc"));
    }

    #[test]
    fn store_parse_displays_path() {
        let err = PacsortError::StoreParse {
            path: PathBuf::from("/opt/pacsort/packages.json"),
            message: "expected value".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/opt/pacsort/packages.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn invalid_size_displays_value() {
        let err = PacsortError::InvalidSize {
            value: "12 parsecs".into(),
        };
        assert!(err.to_string().contains("12 parsecs"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PacsortError = io_err.into();
        assert!(matches!(err, PacsortError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: PacsortError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
