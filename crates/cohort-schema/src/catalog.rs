//! Field catalog
//!
//! The caller-supplied, ordered set of field descriptors the engine
//! resolves criteria against.

use crate::FieldDescriptor;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schema construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two descriptors share the same id
    #[error("duplicate field id: {0}")]
    DuplicateField(String),
}

/// An immutable, ordered collection of field descriptors keyed by id.
///
/// Iteration order is insertion order. The engine only ever reads the
/// catalog; all construction happens in the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldDescriptor>", into = "Vec<FieldDescriptor>")]
pub struct FieldCatalog {
    fields: IndexMap<String, FieldDescriptor>,
}

impl FieldCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, returning the displaced one if the id was
    /// already present
    pub fn insert(&mut self, field: FieldDescriptor) -> Option<FieldDescriptor> {
        self.fields.insert(field.id.clone(), field)
    }

    /// Look up a descriptor by field id
    pub fn get(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.get(id)
    }

    /// Check whether a field id exists
    pub fn contains(&self, id: &str) -> bool {
        self.fields.contains_key(id)
    }

    /// Iterate descriptors in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the catalog has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<FieldDescriptor> for FieldCatalog {
    /// Build a catalog from descriptors; on duplicate ids the last
    /// descriptor wins
    fn from_iter<I: IntoIterator<Item = FieldDescriptor>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for field in iter {
            catalog.insert(field);
        }
        catalog
    }
}

impl TryFrom<Vec<FieldDescriptor>> for FieldCatalog {
    type Error = SchemaError;

    /// Build a catalog from descriptors, rejecting duplicate ids
    fn try_from(fields: Vec<FieldDescriptor>) -> Result<Self, Self::Error> {
        let mut catalog = Self::new();
        for field in fields {
            let id = field.id.clone();
            if catalog.insert(field).is_some() {
                return Err(SchemaError::DuplicateField(id));
            }
        }
        Ok(catalog)
    }
}

impl From<FieldCatalog> for Vec<FieldDescriptor> {
    fn from(catalog: FieldCatalog) -> Self {
        catalog.fields.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldType;
    use pretty_assertions::assert_eq;

    fn sample_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("specialty", "providers.specialty", "Specialty", FieldType::String),
            FieldDescriptor::new("age", "providers.age", "Age", FieldType::Number),
        ]
    }

    #[test]
    fn test_lookup_and_order() {
        let catalog: FieldCatalog = sample_fields().into_iter().collect();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("age").unwrap().label, "Age");
        assert!(catalog.get("missing").is_none());
        let ids: Vec<&str> = catalog.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["specialty", "age"]);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut fields = sample_fields();
        fields.push(FieldDescriptor::new("age", "x.age", "Age again", FieldType::Number));
        let err = FieldCatalog::try_from(fields).unwrap_err();
        assert_eq!(err, SchemaError::DuplicateField("age".to_string()));
    }

    #[test]
    fn test_catalog_serde_round_trip() {
        let catalog: FieldCatalog = sample_fields().into_iter().collect();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: FieldCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }
}
