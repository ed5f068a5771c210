//! Shared error definitions for configuration primitives.

use thiserror::Error;

/// Result alias used throughout the configuration crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing configuration primitive types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration key failed validation.
    #[error("invalid config key `{key}`: {reason}")]
    InvalidKey {
        /// The offending key string.
        key: String,
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// Placeholder delimiters failed validation.
    #[error("invalid placeholder marker: {reason}")]
    InvalidMarker {
        /// Human-readable reason for rejection.
        reason: String,
    },
}
