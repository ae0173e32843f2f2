//! The map-backed reference target.

use crate::{Properties, PropertyAccess, PropertyResult, Value};

/// A plain mutable object with named properties.
///
/// This is the reference `PropertyAccess` implementation: a property map
/// plus a revision counter that advances on every effective mutation, so
/// callers can observe whether a scope actually touched the object.
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    /// Property values.
    properties: Properties,
    /// Mutation counter. Bumped on every effective set or remove.
    revision: u64,
}

impl PropertyBag {
    /// Create a new empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bag with initial properties.
    pub fn with_properties(properties: Properties) -> Self {
        Self {
            properties,
            revision: 0,
        }
    }

    /// Get a property value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Set a property value.
    pub fn set(&mut self, name: String, value: Value) {
        self.properties.insert(name, value);
        self.revision += 1;
    }

    /// Remove a property.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let result = self.properties.remove(name);
        if result.is_some() {
            self.revision += 1;
        }
        result
    }

    /// Returns true if the property exists.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Number of properties currently on the bag.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the bag has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Current revision of the bag.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Iterate over the properties in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl PropertyAccess for PropertyBag {
    fn get_property(&self, name: &str) -> Option<Value> {
        self.properties.get(name).cloned()
    }

    fn set_property(&mut self, name: &str, value: Value) -> PropertyResult<()> {
        self.set(name.to_string(), value);
        Ok(())
    }

    fn remove_property(&mut self, name: &str) -> PropertyResult<Option<Value>> {
        Ok(self.remove(name))
    }
}
