//! Implicit-schema policy.

/// How a transaction handles edge labels and property keys that are first
/// referenced without a prior definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeMakerPolicy {
    /// Create the missing type with default settings on first use.
    #[default]
    DefaultTypes,
    /// Implicit type creation is an error downstream.
    Disallow,
}
