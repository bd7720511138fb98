//! Trellis Config
//!
//! Typed configuration-key registry for backend-facing transaction settings.
//!
//! Responsibilities:
//! - Declare configuration keys as consts, with name and default baked into
//!   the key definition
//! - Store per-transaction backend settings as typed scalar values
//! - Resolve get-or-default lookups through the key, never through casts

mod key;
mod map;
mod value;

pub use key::{ConfigKey, ConfigScalar};
pub use map::ConfigMap;
pub use value::ConfigValue;
