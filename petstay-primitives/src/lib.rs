//! Core shared types for PetStay front-end configuration.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod key;
mod marker;

/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Validated configuration key names.
pub use key::ConfigKey;
/// Template placeholder delimiters.
pub use marker::PlaceholderMarker;
