//! Common error types for Veneer.

use thiserror::Error;

/// Errors that can occur during property access on a target object.
#[derive(Debug, Error)]
pub enum PropertyError {
    /// The property exists but cannot be written.
    #[error("Property is read-only: {name}")]
    ReadOnly { name: String },

    /// The target has a fixed schema and does not know this property.
    #[error("Unknown property: {name}")]
    UnknownProperty { name: String },

    /// The value's type does not fit the property.
    #[error("Type mismatch for {name}: expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: String,
        actual: String,
    },
}

impl PropertyError {
    pub fn read_only(name: impl Into<String>) -> Self {
        Self::ReadOnly { name: name.into() }
    }

    pub fn unknown_property(name: impl Into<String>) -> Self {
        Self::UnknownProperty { name: name.into() }
    }

    pub fn type_mismatch(
        name: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result type for property access operations.
pub type PropertyResult<T> = Result<T, PropertyError>;
