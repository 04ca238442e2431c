//! Equality filters for document lookups

use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Exact-match filter over document fields
///
/// A document matches when every field in the filter is present on it with
/// an equal value. An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldFilter {
    fields: BTreeMap<String, Value>,
}

impl FieldFilter {
    /// Create an empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Require `field` to equal the JSON form of `value`
    pub fn try_eq<V: Serialize>(self, field: impl Into<String>, value: &V) -> Result<Self> {
        Ok(self.eq(field, serde_json::to_value(value)?))
    }

    /// Iterate over the required field/value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Whether the filter has no conditions
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check a stored document against the filter
    pub fn matches(&self, document: &Map<String, Value>) -> bool {
        self.fields
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }
}

impl FromIterator<(String, Value)> for FieldFilter {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
