//! Configuration key names.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const MAX_KEY_LEN: usize = 128;

/// Name of a single configuration entry, such as `COGNITO_DOMAIN`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new configuration key after validating its format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the supplied key is empty, too long, or
    /// contains unsupported characters.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate_key(&key)?;
        Ok(Self(key))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ConfigKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ConfigKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ConfigKey {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ConfigKey> for String {
    fn from(value: ConfigKey) -> Self {
        value.0
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::InvalidKey {
            key: String::new(),
            reason: "key cannot be empty".into(),
        });
    }

    if key.len() > MAX_KEY_LEN {
        return Err(Error::InvalidKey {
            key: key.into(),
            reason: format!("key length must be <= {MAX_KEY_LEN}"),
        });
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Err(Error::InvalidKey {
            key: key.into(),
            reason: "key must contain ASCII alphanumeric, underscore, dash, or dot".into(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_screaming_snake_case() {
        let key = ConfigKey::new("PET_PHOTO_PUBLIC_URL_BASE").unwrap();
        assert_eq!(key.as_str(), "PET_PHOTO_PUBLIC_URL_BASE");
        assert_eq!(key.to_string(), "PET_PHOTO_PUBLIC_URL_BASE");
    }

    #[test]
    fn rejects_empty_key() {
        let err = ConfigKey::new("").expect_err("empty key");
        assert!(matches!(err, Error::InvalidKey { .. }));
    }

    #[test]
    fn rejects_whitespace_and_braces() {
        assert!(ConfigKey::new("API URL").is_err());
        assert!(ConfigKey::new("{{X}}").is_err());
    }

    #[test]
    fn rejects_overlong_key() {
        let long = "K".repeat(MAX_KEY_LEN + 1);
        assert!(ConfigKey::new(long).is_err());
        assert!(ConfigKey::new("K".repeat(MAX_KEY_LEN)).is_ok());
    }

    #[test]
    fn deserialization_validates() {
        let key: ConfigKey = serde_json::from_str("\"AWS_REGION\"").unwrap();
        assert_eq!(key.as_str(), "AWS_REGION");
        assert!(serde_json::from_str::<ConfigKey>("\"bad key\"").is_err());
    }

    #[test]
    fn parses_from_str() {
        let key: ConfigKey = "COGNITO_DOMAIN".parse().unwrap();
        assert_eq!(key.as_ref(), "COGNITO_DOMAIN");
    }
}
