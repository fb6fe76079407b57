//! Nested key→value dictionary.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{ConfigError, ConfigResult};

/// A configuration dictionary: string keys mapped to scalar, sequence or
/// nested-dictionary values.
///
/// Keys are kept sorted so serialisation and diagnostics are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: BTreeMap<String, Value>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document whose root is a mapping. An empty document is an
    /// empty dictionary.
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON document whose root is an object.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Raw access to an entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Read a required entry as `T`.
    pub fn lookup<T: DeserializeOwned>(&self, key: &str) -> ConfigResult<T> {
        self.lookup_opt(key)?.ok_or_else(|| ConfigError::MissingKey {
            key: key.to_string(),
        })
    }

    /// Read an optional entry as `T`. A present entry of the wrong type is
    /// still an error.
    pub fn lookup_opt<T: DeserializeOwned>(&self, key: &str) -> ConfigResult<Option<T>> {
        let Some(value) = self.entries.get(key) else {
            return Ok(None);
        };
        serde_yaml::from_value(value.clone())
            .map(Some)
            .map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })
    }

    /// Read an optional entry as `T`, falling back to `default` when absent.
    pub fn lookup_or<T: DeserializeOwned>(&self, key: &str, default: T) -> ConfigResult<T> {
        Ok(self.lookup_opt(key)?.unwrap_or(default))
    }

    /// Fetch a nested dictionary.
    ///
    /// Returns `Ok(None)` when the key is absent. A key present with an empty
    /// body (`fooCoeffs:` in YAML) is an empty dictionary. Any other value
    /// type is [`ConfigError::NotADictionary`].
    pub fn sub_dict(&self, key: &str) -> ConfigResult<Option<Dictionary>> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(Value::Null) => Ok(Some(Dictionary::default())),
            Some(Value::Mapping(map)) => Self::from_mapping(map).map(Some),
            Some(_) => Err(ConfigError::NotADictionary {
                key: key.to_string(),
            }),
        }
    }

    /// Fetch a nested dictionary, or an empty one when absent.
    pub fn optional_sub_dict(&self, key: &str) -> ConfigResult<Dictionary> {
        Ok(self.sub_dict(key)?.unwrap_or_default())
    }

    /// Insert (or replace) a serialisable value.
    pub fn insert<T: Serialize>(&mut self, key: impl Into<String>, value: T) -> ConfigResult<()> {
        let value = serde_yaml::to_value(value)?;
        self.entries.insert(key.into(), value);
        Ok(())
    }

    /// Insert (or replace) a nested dictionary.
    pub fn insert_dict(&mut self, key: impl Into<String>, dict: Dictionary) {
        self.entries.insert(key.into(), dict.into_value());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Convert into a YAML mapping value.
    pub fn into_value(self) -> Value {
        let mut map = Mapping::new();
        for (key, value) in self.entries {
            map.insert(Value::String(key), value);
        }
        Value::Mapping(map)
    }

    fn from_mapping(map: &Mapping) -> ConfigResult<Self> {
        let mut entries = BTreeMap::new();
        for (key, value) in map {
            let Some(key) = key.as_str() else {
                return Err(ConfigError::NonStringKey {
                    found: format!("{key:?}"),
                });
            };
            entries.insert(key.to_string(), value.clone());
        }
        Ok(Self { entries })
    }
}
