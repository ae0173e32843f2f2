//! Prior state of a single overridden property.

use veneer_core::Value;

/// What a property looked like before an override touched it.
///
/// Absence is a variant of its own rather than a reserved value, so no
/// stored `Value` (`Null` included) can ever be mistaken for "the property
/// did not exist". Restore logic discriminates by matching the variant,
/// never by comparing values.
#[derive(Debug, Clone, PartialEq)]
pub enum Prior {
    /// The property did not exist on the target.
    Absent,
    /// The property existed with this value.
    Value(Value),
}

impl Prior {
    /// Returns true if the property was absent before the override.
    pub fn is_absent(&self) -> bool {
        matches!(self, Prior::Absent)
    }

    /// Get the recorded value if the property existed.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Prior::Value(v) => Some(v),
            Prior::Absent => None,
        }
    }
}

impl From<Option<Value>> for Prior {
    fn from(current: Option<Value>) -> Self {
        match current {
            Some(v) => Prior::Value(v),
            None => Prior::Absent,
        }
    }
}
