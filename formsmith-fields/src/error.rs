//! Error types for the schema store

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors raised while parsing names handed over by a presentation layer.
///
/// Schema mutations themselves never fail: unknown ids and out-of-range
/// option indexes are no-ops. These errors only come from turning strings
/// into archetypes or attribute keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldsError {
    /// Archetype name is not one of text, number, checkbox, select, radio
    #[error("unknown field archetype: {name}")]
    UnknownArchetype { name: String },

    /// Attribute key is not one of label, required, options
    #[error("unknown field attribute: {key}")]
    UnknownAttribute { key: String },
}

impl FieldsError {
    /// Create an unknown archetype error
    pub fn unknown_archetype(name: impl Into<String>) -> Self {
        Self::UnknownArchetype { name: name.into() }
    }

    /// Create an unknown attribute error
    pub fn unknown_attribute(key: impl Into<String>) -> Self {
        Self::UnknownAttribute { key: key.into() }
    }
}
