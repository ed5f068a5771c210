//! Loaders that turn configuration artifacts into [`ConfigMap`]s.

mod json;
mod script;

use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::map::ConfigMap;
use crate::verify::VerifiedConfig;

pub use json::from_json_str;
pub use script::from_script_str;

/// On-disk representation of a configuration artifact.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SourceFormat {
    /// A JSON object of string values.
    Json,
    /// A `window.NAME = { ... };` browser script.
    Script,
}

impl SourceFormat {
    /// Picks the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "js" | "mjs" => Some(Self::Script),
            _ => None,
        }
    }

    /// Parses `text` in this format.
    ///
    /// # Errors
    ///
    /// Propagates the parser's error.
    pub fn parse(self, text: &str) -> ConfigResult<ConfigMap> {
        match self {
            Self::Json => from_json_str(text),
            Self::Script => from_script_str(text),
        }
    }
}

/// Reads and parses a configuration file, choosing the parser by extension.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedFormat`] for an unknown extension,
/// [`ConfigError::Io`] when the file cannot be read, and any parser error.
pub fn load_file(path: impl AsRef<Path>) -> ConfigResult<ConfigMap> {
    let path = path.as_ref();
    let format = SourceFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map = format.parse(&text)?;
    debug!(path = %path.display(), ?format, entries = map.len(), "config loaded");
    Ok(map)
}

/// Loads a configuration file and verifies it with the default marker.
///
/// # Errors
///
/// Returns any [`load_file`] error or
/// [`ConfigError::UnresolvedPlaceholder`].
pub fn load_verified(path: impl AsRef<Path>) -> ConfigResult<VerifiedConfig> {
    VerifiedConfig::new(load_file(path)?)
}
