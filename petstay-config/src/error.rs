//! Error definitions for configuration loading and verification.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or verifying a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value still contains a template delimiter.
    #[error("missing config value: {key} (did you forget to set environment variables?)")]
    UnresolvedPlaceholder {
        /// Name of the offending key.
        key: String,
    },

    /// The same key was defined more than once.
    #[error("duplicate config key: {key}")]
    DuplicateKey {
        /// Name of the repeated key.
        key: String,
    },

    /// A key failed primitive validation.
    #[error(transparent)]
    InvalidKey(#[from] petstay_primitives::Error),

    /// A JSON document could not be decoded into a configuration map.
    #[error("invalid JSON configuration: {source}")]
    Json {
        /// Underlying decoder error.
        #[from]
        source: serde_json::Error,
    },

    /// A script artifact could not be parsed.
    #[error("invalid config script at line {line}: {reason}")]
    Script {
        /// One-based line where parsing stopped.
        line: usize,
        /// Human-readable reason for the failure.
        reason: String,
    },

    /// A configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file extension does not map to a known source format.
    #[error("unsupported config format: {}", path.display())]
    UnsupportedFormat {
        /// File with the unrecognized extension.
        path: PathBuf,
    },

    /// A verified configuration does not match the typed front-end schema.
    #[error("config does not match front-end schema: {reason}")]
    Schema {
        /// Human-readable reason for the mismatch.
        reason: String,
    },
}
