//! Mutable configuration map with typed access.

use std::collections::HashMap;

use crate::key::{ConfigKey, ConfigScalar};
use crate::value::ConfigValue;

/// A map of backend-facing configuration entries, addressed by typed keys.
///
/// All writes go through [`ConfigKey`]s, so an entry always holds the shape
/// its key declares. A value stored under a colliding key name of a different
/// shape reads as absent.
///
/// The map is mutable only through `&mut self`; a frozen owner that hands out
/// shared references makes it immutable for all readers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigMap {
    entries: HashMap<&'static str, ConfigValue>,
}

impl ConfigMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a key, replacing any previous entry.
    pub fn set<T: ConfigScalar>(&mut self, key: &ConfigKey<T>, value: T) {
        self.entries.insert(key.name(), value.into_value());
    }

    /// Get the value for a key: the explicitly set value if present,
    /// otherwise the key's declared default, otherwise `None`.
    pub fn get<T: ConfigScalar>(&self, key: &ConfigKey<T>) -> Option<T> {
        match self.entries.get(key.name()) {
            Some(value) => T::from_value(value),
            None => key.default_value(),
        }
    }

    /// Borrowing accessor for string entries.
    ///
    /// Returns only explicitly set values; declared defaults are produced
    /// owned and cannot be borrowed from the key.
    pub fn get_str(&self, key: &ConfigKey<String>) -> Option<&str> {
        self.entries.get(key.name()).and_then(ConfigValue::as_str)
    }

    /// Whether the key has been explicitly set. Declared defaults do not
    /// count as set.
    pub fn is_set<T: ConfigScalar>(&self, key: &ConfigKey<T>) -> bool {
        self.entries.contains_key(key.name())
    }

    /// Number of explicitly set entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been explicitly set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
