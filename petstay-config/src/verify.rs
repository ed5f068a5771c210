//! Placeholder verification for loaded configuration maps.

use petstay_primitives::{ConfigKey, PlaceholderMarker};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::map::ConfigMap;

/// Verifies that no value in `config` contains the default `{{` / `}}` delimiters.
///
/// # Errors
///
/// Returns [`ConfigError::UnresolvedPlaceholder`] naming the first offending key
/// in ascending key order.
pub fn verify(config: &ConfigMap) -> ConfigResult<()> {
    verify_with(config, &PlaceholderMarker::default())
}

/// Verifies `config` against a custom placeholder marker.
///
/// Stops at the first offending key.
///
/// # Errors
///
/// Returns [`ConfigError::UnresolvedPlaceholder`] naming the first offending key
/// in ascending key order.
pub fn verify_with(config: &ConfigMap, marker: &PlaceholderMarker) -> ConfigResult<()> {
    if let Some((key, _)) = config.iter().find(|(_, value)| marker.is_present_in(value)) {
        warn!(%key, "config value still contains a template placeholder");
        return Err(ConfigError::UnresolvedPlaceholder {
            key: key.to_string(),
        });
    }

    debug!(entries = config.len(), "config verified");
    Ok(())
}

/// Collects every key whose value contains a placeholder delimiter.
///
/// Used for diagnostics when a caller wants to report all offenders at once
/// rather than only the first one.
#[must_use]
pub fn find_unresolved<'a>(
    config: &'a ConfigMap,
    marker: &PlaceholderMarker,
) -> Vec<&'a ConfigKey> {
    config
        .iter()
        .filter(|(_, value)| marker.is_present_in(value))
        .map(|(key, _)| key)
        .collect()
}

/// A [`ConfigMap`] that passed placeholder verification.
///
/// Values of this type can only be produced by running the verifier, so
/// consumers holding one never see a `{{...}}` value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VerifiedConfig {
    map: ConfigMap,
}

impl VerifiedConfig {
    /// Verifies `map` with the default marker and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnresolvedPlaceholder`] when verification fails.
    pub fn new(map: ConfigMap) -> ConfigResult<Self> {
        Self::with_marker(map, &PlaceholderMarker::default())
    }

    /// Verifies `map` with a custom marker and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnresolvedPlaceholder`] when verification fails.
    pub fn with_marker(map: ConfigMap, marker: &PlaceholderMarker) -> ConfigResult<Self> {
        verify_with(&map, marker)?;
        Ok(Self { map })
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key)
    }

    /// Returns the underlying map.
    #[must_use]
    pub fn map(&self) -> &ConfigMap {
        &self.map
    }

    /// Unwraps the verified map.
    #[must_use]
    pub fn into_inner(self) -> ConfigMap {
        self.map
    }
}

impl AsRef<ConfigMap> for VerifiedConfig {
    fn as_ref(&self) -> &ConfigMap {
        &self.map
    }
}

impl ConfigMap {
    /// Runs [`verify`] and wraps the map on success.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnresolvedPlaceholder`] when verification fails.
    pub fn verify(self) -> ConfigResult<VerifiedConfig> {
        VerifiedConfig::new(self)
    }
}
