//! The property access capability.
//!
//! Targets of a scoped override are not required to be map-backed. Anything
//! that can read, write and remove named properties can be overridden:
//! plain property bags, structs with fixed fields behind an accessor table,
//! or wrappers around foreign object models. This trait is that contract.

use crate::{PropertyResult, Value};

/// Named property access on a mutable target object.
///
/// Absence is a signal, not an error: `get_property` returns `None` for a
/// property that does not exist, and `remove_property` of an absent name is
/// an idempotent no-op. Writes may fail for targets with fixed or protected
/// schemas.
pub trait PropertyAccess {
    /// Read the current value of a property, or `None` if it is absent.
    fn get_property(&self, name: &str) -> Option<Value>;

    /// Set a property to a value, creating it if absent.
    fn set_property(&mut self, name: &str, value: Value) -> PropertyResult<()>;

    /// Remove a property, returning its value if it was present.
    ///
    /// Removing an absent property returns `Ok(None)`.
    fn remove_property(&mut self, name: &str) -> PropertyResult<Option<Value>>;

    /// Returns true if the property currently exists on the target.
    fn has_property(&self, name: &str) -> bool {
        self.get_property(name).is_some()
    }

    /// Human-readable representation of the target, used in diagnostics.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}
