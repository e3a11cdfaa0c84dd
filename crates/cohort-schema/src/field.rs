//! Field descriptors
//!
//! A [`FieldDescriptor`] describes one targetable field: how it is
//! displayed, which column it maps to, its declared type, and an
//! optional enumerated value set.

use crate::Scalar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of a targetable field.
///
/// The declared type drives operator compatibility, value validation
/// and rendering. It is carried on every comparison node so trees stay
/// self-describing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free-form or enumerated text
    #[default]
    String,
    /// Numeric value
    Number,
    /// True/false flag
    Boolean,
    /// Calendar date (carried as a string value)
    Date,
    /// Multi-valued field
    Array,
    /// Structured value with no finer typing
    Object,
}

impl FieldType {
    /// Get the wire/display name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an enumerated value set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Stored value
    pub value: Scalar,
    /// Display label
    pub label: String,
}

impl FieldOption {
    /// Create an option from a value and its display label
    pub fn new(value: impl Into<Scalar>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Descriptor of one targetable field.
///
/// `id` must be unique within a catalog. `storage_name` is assumed to
/// be a valid column reference for the target query language; it is
/// not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Unique key referenced by comparison nodes
    pub id: String,
    /// Column reference used by the SQL back-end
    pub storage_name: String,
    /// Display name used by the text back-end
    pub label: String,
    /// Declared type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Enumerated value set; empty if the field is free-form
    #[serde(default)]
    pub options: Vec<FieldOption>,
    /// Whether a criterion on this field must be present
    #[serde(default)]
    pub required: bool,
}

impl FieldDescriptor {
    /// Create a free-form, optional field descriptor
    pub fn new(
        id: impl Into<String>,
        storage_name: impl Into<String>,
        label: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            id: id.into(),
            storage_name: storage_name.into(),
            label: label.into(),
            field_type,
            options: Vec::new(),
            required: false,
        }
    }

    /// Attach an enumerated value set
    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_descriptor_wire_format() {
        let field = FieldDescriptor::new("specialty", "providers.specialty", "Specialty", FieldType::String);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["id"], "specialty");
        assert_eq!(json["storageName"], "providers.specialty");
        assert_eq!(json["type"], "string");
        assert_eq!(json["required"], false);
    }

    #[test]
    fn test_descriptor_defaults_on_deserialize() {
        let field: FieldDescriptor = serde_json::from_str(
            r#"{"id":"age","storageName":"providers.age","label":"Age","type":"number"}"#,
        )
        .unwrap();
        assert_eq!(field.field_type, FieldType::Number);
        assert!(field.options.is_empty());
        assert!(!field.required);
    }
}
