//! Merge-patch for partial document updates
//!
//! A [`Patch`] only ever carries fields that will overwrite stored values.
//! Null and empty values are dropped when the patch is built, so a caller
//! can pass a complete field set where unset fields are defaulted to empty
//! without erasing anything. Clearing a field is not
//! expressible: a null in the input means "leave as is", never "set to null".

use crate::constants::ID_FIELD;
use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Set of field assignments applied by a partial update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    fields: BTreeMap<String, Value>,
}

impl Patch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `field`, unless the value is null or empty
    pub fn set<V: Serialize>(mut self, field: impl Into<String>, value: V) -> Result<Self> {
        let value = serde_json::to_value(value)?;
        if !is_empty_value(&value) {
            self.fields.insert(field.into(), value);
        }
        Ok(self)
    }

    /// Assign `value` to `field` only when it is `Some` and non-empty
    pub fn set_if_some<V: Serialize>(
        self,
        field: impl Into<String>,
        value: Option<V>,
    ) -> Result<Self> {
        match value {
            Some(value) => self.set(field, value),
            None => Ok(self),
        }
    }

    /// Build a patch from a JSON object, skipping null and empty members
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                fields: map
                    .into_iter()
                    .filter(|(_, value)| !is_empty_value(value))
                    .collect(),
            }),
            other => Err(Error::invalid_argument(format!(
                "patch must be a JSON object, got {other}"
            ))),
        }
    }

    /// Build a patch from any serializable struct, skipping null and empty fields
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self> {
        Self::from_json(serde_json::to_value(value)?)
    }

    /// Whether the patch assigns no field at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether the patch assigns `field`
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterate over the field assignments
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Reject patches that would rewrite the document id
    pub fn ensure_id_untouched(&self) -> Result<()> {
        if self.contains(ID_FIELD) {
            return Err(Error::invalid_argument(format!(
                "field '{ID_FIELD}' cannot be updated"
            )));
        }
        Ok(())
    }

    /// Merge the assignments into a stored document
    pub fn apply_to(&self, document: &mut Map<String, Value>) {
        for (field, value) in &self.fields {
            document.insert(field.clone(), value.clone());
        }
    }
}

/// Null, empty strings, empty arrays and empty objects count as "no value"
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}
