//! JSON object source.

use crate::error::ConfigResult;
use crate::map::ConfigMap;

/// Parses a JSON object whose values are all strings.
///
/// # Errors
///
/// Returns [`crate::ConfigError::Json`] for malformed JSON, non-string values,
/// invalid keys, or a key that appears twice.
pub fn from_json_str(text: &str) -> ConfigResult<ConfigMap> {
    Ok(serde_json::from_str(text)?)
}
