//! Veneer Scope
//!
//! Scoped property overrides with guaranteed restoration.
//!
//! Responsibilities:
//! - Apply a set of named property values to a target for a scope's duration
//! - Record prior state (value or absence) per property during entry
//! - Restore recorded state on every exit path, including panic unwinding
//! - Mark override-machinery mutations with a transient internal flag
//!
//! # Module Structure
//!
//! - `record` - Prior state of a single property (value or absent)
//! - `overrides` - PropertyOverride, the base scoped-override mechanism
//! - `internal` - InternalPropertyOverride, mutation-window marking
//! - `error` - Error types for override failures

mod error;
mod internal;
mod overrides;
mod record;

pub use error::{OverrideError, OverrideResult};
pub use internal::{
    with_properties_internal, ActiveInternalOverride, InternalPropertyOverride, INTERNAL_MARKER,
};
pub use overrides::{with_properties, ActiveOverride, PropertyOverride};
pub use record::Prior;
