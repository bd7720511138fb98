//! Typed configuration keys with declared defaults.

use std::fmt;

use crate::value::ConfigValue;

/// Conversion between a Rust scalar and its [`ConfigValue`] representation.
///
/// Implemented for the closed set of scalar shapes a configuration map can
/// hold. A key's value type fixes the conversion at the key definition, so
/// reads and writes through the same key always agree on shape.
pub trait ConfigScalar: Sized {
    /// Wrap the scalar into its storage representation.
    fn into_value(self) -> ConfigValue;

    /// Unwrap the scalar from its storage representation, if the shapes match.
    fn from_value(value: &ConfigValue) -> Option<Self>;
}

impl ConfigScalar for bool {
    fn into_value(self) -> ConfigValue {
        ConfigValue::Bool(self)
    }

    fn from_value(value: &ConfigValue) -> Option<Self> {
        value.as_bool()
    }
}

impl ConfigScalar for i64 {
    fn into_value(self) -> ConfigValue {
        ConfigValue::Int(self)
    }

    fn from_value(value: &ConfigValue) -> Option<Self> {
        value.as_int()
    }
}

impl ConfigScalar for String {
    fn into_value(self) -> ConfigValue {
        ConfigValue::String(self)
    }

    fn from_value(value: &ConfigValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

/// A typed configuration key.
///
/// Keys are declared as `const` items: the name and the declared default are
/// baked in at the definition site, so a get-or-default lookup needs nothing
/// but the key. The default is a plain function pointer to keep the key
/// const-constructible for owned value types.
pub struct ConfigKey<T> {
    name: &'static str,
    default: Option<fn() -> T>,
}

impl<T: ConfigScalar> ConfigKey<T> {
    /// Declare a key with no default. Absence of the entry is meaningful to
    /// the reader.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            default: None,
        }
    }

    /// Declare a key whose reads fall back to `default` when unset.
    pub const fn with_default(name: &'static str, default: fn() -> T) -> Self {
        Self {
            name,
            default: Some(default),
        }
    }

    /// The key's name in the map.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the key declares a default.
    pub const fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Produce the declared default value, if any.
    pub fn default_value(&self) -> Option<T> {
        self.default.map(|produce| produce())
    }
}

impl<T> fmt::Debug for ConfigKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigKey")
            .field("name", &self.name)
            .field("has_default", &self.default.is_some())
            .finish()
    }
}
