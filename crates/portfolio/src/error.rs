//! Error types for the portfolio site.
//!
//! This module defines all error types used throughout the portfolio crate.
//! Detailed variants are for logs and operators; visitors only ever see the
//! generic text produced by the HTTP layer.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for portfolio operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Message Store Errors ===
    /// The message store exists but does not hold a valid record array.
    #[error("message store at {path} is corrupt: {source}")]
    CorruptStore {
        /// Path to the store file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The message store exists but could not be read.
    #[error("failed to read message store at {path}: {source}")]
    StoreRead {
        /// Path to the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the updated message store failed.
    #[error("failed to write message store at {path}: {source}")]
    StoreWrite {
        /// Path to the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for portfolio operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error means the message store could not be parsed.
    #[must_use]
    pub fn is_corrupt_store(&self) -> bool {
        matches!(self, Self::CorruptStore { .. })
    }

    /// Check if this error came from writing the message store.
    #[must_use]
    pub fn is_store_write(&self) -> bool {
        matches!(self, Self::StoreWrite { .. })
    }
}
