use std::collections::HashMap;

use crate::Value;

/// Configured return values and property values of one substitute, keyed by member name.
///
/// Lookups of names that were never configured return `None`, which is distinct from a
/// configured [`Value::Nil`]. Whether a missing entry is an error is decided by the caller.
#[derive(Debug, Default)]
pub struct StubStore {
    return_values: HashMap<String, Value>,
    property_values: HashMap<String, Value>,
}

impl StubStore {
    pub fn set_return_value(&mut self, function: impl Into<String>, value: impl Into<Value>) {
        self.return_values.insert(function.into(), value.into());
    }

    pub fn return_value(&self, function: &str) -> Option<&Value> {
        self.return_values.get(function)
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.property_values.insert(name.into(), value.into());
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.property_values.get(name)
    }
}
