//! Loosely typed provider payload values.
//!
//! Raw payloads reach the provider layer before any schema is applied:
//! deserialized management API objects, identity-provider SDK responses.
//! [`ConfigValue`] models that shape, including timestamps carried in their
//! native representation rather than as strings.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A loosely typed value in a raw provider payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// No value (null).
    Null,
    /// A boolean value.
    Bool(bool),
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A string value.
    String(String),
    /// A timestamp in the payload's native representation.
    ///
    /// Only in-memory payloads carry this variant; on the wire a timestamp
    /// is an RFC 3339 string and deserializes as [`ConfigValue::String`].
    Timestamp(DateTime<Utc>),
    /// An ordered list of values.
    Array(Vec<ConfigValue>),
    /// A map of string keys to nested values.
    Map(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Create an empty map value.
    #[must_use]
    pub fn object() -> Self {
        ConfigValue::Map(BTreeMap::new())
    }

    /// Insert an entry, returning the updated map.
    ///
    /// Entries can only be added to maps; any other value is replaced by a
    /// fresh map holding just the new entry.
    #[must_use]
    pub fn with(self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        let mut entries = match self {
            ConfigValue::Map(entries) => entries,
            _ => BTreeMap::new(),
        };
        entries.insert(key.into(), value.into());
        ConfigValue::Map(entries)
    }

    /// Name of the value's shape, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Timestamp(_) => "timestamp",
            ConfigValue::Array(_) => "array",
            ConfigValue::Map(_) => "map",
        }
    }

    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Get as a boolean if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as an integer if this is an integer value.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as a string if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a timestamp if this is a native timestamp value.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            ConfigValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Get as a slice if this is an array value.
    pub fn as_array(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get as a map if this is a map value.
    pub fn as_map(&self) -> Option<&BTreeMap<String, ConfigValue>> {
        match self {
            ConfigValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a key in a map value.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.as_map().and_then(|entries| entries.get(key))
    }

    /// Convert to a JSON value.
    ///
    /// Native timestamps render as RFC 3339 strings so that record fields
    /// declared as timestamps can parse them back.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            ConfigValue::Null => Value::Null,
            ConfigValue::Bool(b) => Value::Bool(*b),
            ConfigValue::Integer(i) => Value::Number((*i).into()),
            ConfigValue::Float(f) => {
                serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number)
            }
            ConfigValue::String(s) => Value::String(s.clone()),
            ConfigValue::Timestamp(ts) => Value::String(ts.to_rfc3339()),
            ConfigValue::Array(items) => {
                Value::Array(items.iter().map(ConfigValue::to_json).collect())
            }
            ConfigValue::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<i32> for ConfigValue {
    fn from(i: i32) -> Self {
        ConfigValue::Integer(i64::from(i))
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<DateTime<Utc>> for ConfigValue {
    fn from(ts: DateTime<Utc>) -> Self {
        ConfigValue::Timestamp(ts)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(vec: Vec<T>) -> Self {
        ConfigValue::Array(vec.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, ConfigValue>> for ConfigValue {
    fn from(entries: BTreeMap<String, ConfigValue>) -> Self {
        ConfigValue::Map(entries)
    }
}

impl FromIterator<(String, ConfigValue)> for ConfigValue {
    fn from_iter<T: IntoIterator<Item = (String, ConfigValue)>>(iter: T) -> Self {
        ConfigValue::Map(iter.into_iter().collect())
    }
}
