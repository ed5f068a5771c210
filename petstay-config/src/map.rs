//! Immutable key/value configuration map.

use std::collections::BTreeMap;
use std::collections::btree_map::{self, Entry};
use std::fmt;

use petstay_primitives::ConfigKey;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, ConfigResult};

/// Configuration keys mapped to their string values.
///
/// Keys are unique and iterate in ascending order. A map has no mutating
/// operations once built; construct it with [`ConfigMap::builder`],
/// [`ConfigMap::from_pairs`] or by deserializing a map-shaped document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigMap {
    entries: BTreeMap<ConfigKey, String>,
}

impl ConfigMap {
    /// Returns a builder for constructing maps.
    #[must_use]
    pub fn builder() -> ConfigMapBuilder {
        ConfigMapBuilder::default()
    }

    /// Builds a map from key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKey`] for a malformed key and
    /// [`ConfigError::DuplicateKey`] when a key appears twice.
    pub fn from_pairs<I, K, V>(pairs: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .try_fold(Self::builder(), |builder, (key, value)| {
                builder.insert(key, value)
            })
            .map(ConfigMapBuilder::build)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.entries.keys()
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }
}

impl<'a> IntoIterator for &'a ConfigMap {
    type Item = (&'a ConfigKey, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of a [`ConfigMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, ConfigKey, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a ConfigKey, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Builder for [`ConfigMap`].
#[derive(Debug, Default)]
pub struct ConfigMapBuilder {
    entries: BTreeMap<ConfigKey, String>,
}

impl ConfigMapBuilder {
    /// Adds an entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidKey`] when the key is malformed and
    /// [`ConfigError::DuplicateKey`] when it was already inserted.
    pub fn insert(self, key: impl Into<String>, value: impl Into<String>) -> ConfigResult<Self> {
        let key = ConfigKey::new(key)?;
        self.insert_key(key, value.into())
    }

    pub(crate) fn insert_key(mut self, key: ConfigKey, value: String) -> ConfigResult<Self> {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => Err(ConfigError::DuplicateKey {
                key: entry.key().to_string(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(self)
            }
        }
    }

    /// Consumes the builder and returns the map.
    #[must_use]
    pub fn build(self) -> ConfigMap {
        ConfigMap {
            entries: self.entries,
        }
    }
}

impl Serialize for ConfigMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ConfigMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ConfigMapVisitor)
    }
}

struct ConfigMapVisitor;

impl<'de> Visitor<'de> for ConfigMapVisitor {
    type Value = ConfigMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of unique config keys to string values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut builder = ConfigMap::builder();
        while let Some((key, value)) = access.next_entry::<ConfigKey, String>()? {
            builder = builder
                .insert_key(key, value)
                .map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_pairs() {
        let map = ConfigMap::from_pairs([("B", "2"), ("A", "1")]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("A"), Some("1"));
        assert_eq!(map.get("B"), Some("2"));
        assert_eq!(map.get("C"), None);
        assert!(map.contains_key("A"));
    }

    #[test]
    fn iterates_in_key_order() {
        let map = ConfigMap::from_pairs([("ZETA", "z"), ("ALPHA", "a"), ("MID", "m")]).unwrap();
        let keys: Vec<&str> = map.keys().map(ConfigKey::as_str).collect();
        assert_eq!(keys, vec!["ALPHA", "MID", "ZETA"]);
        let values: Vec<&str> = map.iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec!["a", "m", "z"]);
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = ConfigMap::builder()
            .insert("BOOKINGS_API_URL", "https://api.example.com/booking")
            .unwrap()
            .insert("BOOKINGS_API_URL", "https://api.example.com/bookings")
            .expect_err("duplicate");
        assert!(matches!(err, ConfigError::DuplicateKey { ref key } if key == "BOOKINGS_API_URL"));
    }

    #[test]
    fn rejects_invalid_keys() {
        let err = ConfigMap::from_pairs([("not a key", "v")]).expect_err("invalid key");
        assert!(matches!(err, ConfigError::InvalidKey(_)));
    }

    #[test]
    fn empty_map() {
        let map = ConfigMap::builder().build();
        assert!(map.is_empty());
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn deserializes_and_rejects_duplicates() {
        let map: ConfigMap = serde_json::from_str(r#"{"AWS_REGION":"us-east-2"}"#).unwrap();
        assert_eq!(map.get("AWS_REGION"), Some("us-east-2"));

        let err = serde_json::from_str::<ConfigMap>(r#"{"A":"1","A":"2"}"#).expect_err("dup");
        assert!(err.to_string().contains("duplicate config key: A"));
    }

    #[test]
    fn deserialization_rejects_non_string_values() {
        assert!(serde_json::from_str::<ConfigMap>(r#"{"PORT":8080}"#).is_err());
        assert!(serde_json::from_str::<ConfigMap>(r#"["A"]"#).is_err());
    }

    #[test]
    fn serializes_as_object() {
        let map = ConfigMap::from_pairs([("B", "2"), ("A", "1")]).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"A":"1","B":"2"}"#);
    }
}
