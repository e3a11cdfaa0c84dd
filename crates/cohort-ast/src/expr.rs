//! Expression tree nodes
//!
//! The tree is a closed sum of two node kinds: a comparison leaf and a
//! logical group. The wire format is internally tagged so trees
//! round-trip through plain JSON:
//!
//! ```json
//! {"type": "comparison", "field": "specialty", "operator": "equals",
//!  "value": "Cardiology", "fieldType": "string"}
//! {"type": "logical", "operator": "and", "expressions": [...]}
//! ```

use crate::{ComparisonOp, LogicalOp};
use cohort_schema::{FieldType, Value};
use serde::{Deserialize, Serialize};

/// One node of a targeting filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Expr {
    /// A field comparison leaf
    Comparison(Comparison),
    /// A logical group over child expressions
    Logical(Group),
}

/// A single field comparison.
///
/// `field_type` is the declared type of the referenced field, carried
/// on the node rather than re-derived so the node stays
/// self-describing; the validator checks it against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Catalog id of the compared field
    pub field: String,
    /// Comparison operator
    pub operator: ComparisonOp,
    /// Comparison value; null only for the null-test operators
    #[serde(default)]
    pub value: Value,
    /// Declared type of the field
    #[serde(rename = "fieldType")]
    pub field_type: FieldType,
}

/// A logical group of child expressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Connective joining the children
    pub operator: LogicalOp,
    /// Ordered children; comparisons or nested groups
    #[serde(default)]
    pub expressions: Vec<Expr>,
}

impl Expr {
    /// Create a comparison leaf
    pub fn comparison(
        field: impl Into<String>,
        operator: ComparisonOp,
        value: impl Into<Value>,
        field_type: FieldType,
    ) -> Self {
        Self::Comparison(Comparison {
            field: field.into(),
            operator,
            value: value.into(),
            field_type,
        })
    }

    /// Create a logical group
    pub fn group(operator: LogicalOp, expressions: Vec<Expr>) -> Self {
        Self::Logical(Group { operator, expressions })
    }

    /// Create a conjunction
    pub fn and(expressions: Vec<Expr>) -> Self {
        Self::group(LogicalOp::And, expressions)
    }

    /// Create a disjunction
    pub fn or(expressions: Vec<Expr>) -> Self {
        Self::group(LogicalOp::Or, expressions)
    }

    /// Create a negation of a single child
    pub fn not(child: Expr) -> Self {
        Self::group(LogicalOp::Not, vec![child])
    }

    /// Check if this node is a comparison leaf
    pub const fn is_comparison(&self) -> bool {
        matches!(self, Self::Comparison(_))
    }

    /// Check if this node is a logical group
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Logical(_))
    }
}

impl From<Comparison> for Expr {
    fn from(node: Comparison) -> Self {
        Self::Comparison(node)
    }
}

impl From<Group> for Expr {
    fn from(node: Group) -> Self {
        Self::Logical(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comparison_wire_format() {
        let node = Expr::comparison("specialty", ComparisonOp::Equals, "Cardiology", FieldType::String);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "comparison",
                "field": "specialty",
                "operator": "equals",
                "value": "Cardiology",
                "fieldType": "string",
            })
        );
    }

    #[test]
    fn test_nested_tree_round_trip() {
        let tree = Expr::not(Expr::or(vec![
            Expr::comparison("specialty", ComparisonOp::Equals, "Cardiology", FieldType::String),
            Expr::comparison("age", ComparisonOp::GreaterThan, 40i64, FieldType::Number),
        ]));
        let json = serde_json::to_string(&tree).unwrap();
        let back: Expr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn test_partial_tree_deserializes_with_defaults() {
        let node: Expr = serde_json::from_str(
            r#"{"type":"comparison","field":"specialty","operator":"is_null","fieldType":"string"}"#,
        )
        .unwrap();
        match node {
            Expr::Comparison(c) => assert!(c.value.is_null()),
            Expr::Logical(_) => panic!("expected comparison"),
        }

        let group: Expr = serde_json::from_str(r#"{"type":"logical","operator":"and"}"#).unwrap();
        match group {
            Expr::Logical(g) => assert!(g.expressions.is_empty()),
            Expr::Comparison(_) => panic!("expected group"),
        }
    }
}
