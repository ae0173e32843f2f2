//! Override error types.

use thiserror::Error;
use veneer_core::PropertyError;

/// Errors raised by scoped property overrides.
#[derive(Debug, Error)]
pub enum OverrideError {
    /// The target lookup produced no object to override.
    #[error("no target object to override")]
    MissingTarget,

    /// A property access on the target failed.
    #[error("property access failed: {0}")]
    Property(#[from] PropertyError),

    /// The scope's borrow was already taken by a previous exit.
    #[error("override scope already restored")]
    AlreadyRestored,
}

/// Result type for override operations.
pub type OverrideResult<T> = Result<T, OverrideError>;
