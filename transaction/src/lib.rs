//! Trellis Transaction
//!
//! Transaction configuration and construction for the graph layer.
//!
//! Responsibilities:
//! - Collect per-transaction settings through a fluent `TransactionBuilder`
//! - Seed builder defaults from the graph-wide `GraphConfig`
//! - Enforce setting interactions (batch loading, thread binding, the
//!   combined cache derivation) at mutation time
//! - Freeze the settings into an immutable `TxConfig` snapshot and hand it
//!   to the graph's `TransactionFactory` on `start`

mod builder;
mod error;
mod graph_config;

pub use builder::{TransactionBuilder, TransactionFactory};
pub use error::{TransactionError, TransactionResult};
pub use graph_config::GraphConfig;
