//! Scalar values stored in a configuration map.

use std::fmt;

/// A scalar configuration value.
///
/// The closed set of shapes a backend configuration entry can take. Typed
/// access goes through [`ConfigKey`](crate::ConfigKey); this enum is the
/// untyped storage representation behind it.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// Boolean flag.
    Bool(bool),
    /// 64-bit signed integer. Also carries nanosecond-epoch timestamps.
    Int(i64),
    /// UTF-8 string.
    String(String),
}

impl ConfigValue {
    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Int(i) => write!(f, "{}", i),
            ConfigValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
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
