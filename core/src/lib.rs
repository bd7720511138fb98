//! Trellis Core Types
//!
//! This crate provides the types shared by the transaction-building and
//! storage layers:
//! - The `TransactionConfiguration` read contract and its frozen `TxConfig`
//!   snapshot
//! - Graph-level configuration keys stamped into the backend map
//! - The implicit-schema policy (`TypeMakerPolicy`)
//! - The approximate nanosecond clock used for timestamp defaults
//! - Common error types

mod error;
mod keys;
mod time;
mod txconfig;
mod typemaker;

pub use error::*;
pub use keys::*;
pub use time::*;
pub use txconfig::*;
pub use typemaker::*;
