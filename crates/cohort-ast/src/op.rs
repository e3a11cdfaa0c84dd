//! Criteria operators

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators applicable to a single field.
///
/// Which operators are legal for a field is decided by its declared
/// type; see [`crate::operators_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOp {
    /// Exact equality
    Equals,
    /// Exact inequality
    NotEquals,
    /// Strictly greater
    GreaterThan,
    /// Strictly less
    LessThan,
    /// Greater or equal
    GreaterThanEquals,
    /// Less or equal
    LessThanEquals,
    /// Substring / element containment
    Contains,
    /// Negated containment
    NotContains,
    /// Prefix match
    StartsWith,
    /// Suffix match
    EndsWith,
    /// Membership in a value list
    In,
    /// Negated membership
    NotIn,
    /// Field has no value
    IsNull,
    /// Field has a value
    IsNotNull,
}

impl ComparisonOp {
    /// Get the wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equals => "equals",
            Self::NotEquals => "not_equals",
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
            Self::GreaterThanEquals => "greater_than_equals",
            Self::LessThanEquals => "less_than_equals",
            Self::Contains => "contains",
            Self::NotContains => "not_contains",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::IsNull => "is_null",
            Self::IsNotNull => "is_not_null",
        }
    }

    /// Check if this operator takes no comparison value.
    ///
    /// Null is legal for exactly these operators and must be rejected
    /// for every other one.
    pub const fn allows_null(&self) -> bool {
        matches!(self, Self::IsNull | Self::IsNotNull)
    }

    /// Check if this is an ordering comparison
    pub const fn is_ordering(&self) -> bool {
        matches!(
            self,
            Self::GreaterThan | Self::LessThan | Self::GreaterThanEquals | Self::LessThanEquals
        )
    }

    /// Check if this is a pattern operator (compiled to LIKE)
    pub const fn is_pattern(&self) -> bool {
        matches!(
            self,
            Self::Contains | Self::NotContains | Self::StartsWith | Self::EndsWith
        )
    }

    /// Check if this is a membership operator over a value list
    pub const fn is_membership(&self) -> bool {
        matches!(self, Self::In | Self::NotIn)
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boolean connectives for grouping criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOp {
    /// Every child must match
    And,
    /// Any child may match
    Or,
    /// Negation of a single child
    Not,
}

impl LogicalOp {
    /// Get the wire name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
        }
    }

    /// Upper-case keyword, used identically by the text and SQL
    /// back-ends when joining children
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_operators() {
        assert!(ComparisonOp::IsNull.allows_null());
        assert!(ComparisonOp::IsNotNull.allows_null());
        assert!(!ComparisonOp::Equals.allows_null());
        assert!(!ComparisonOp::In.allows_null());
    }

    #[test]
    fn test_operator_classes_are_disjoint() {
        for op in [
            ComparisonOp::Equals,
            ComparisonOp::GreaterThan,
            ComparisonOp::Contains,
            ComparisonOp::In,
            ComparisonOp::IsNull,
        ] {
            let classes = [op.is_ordering(), op.is_pattern(), op.is_membership(), op.allows_null()];
            assert!(classes.iter().filter(|c| **c).count() <= 1, "{op} in two classes");
        }
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&ComparisonOp::GreaterThanEquals).unwrap(),
            "\"greater_than_equals\""
        );
        assert_eq!(serde_json::to_string(&LogicalOp::And).unwrap(), "\"and\"");
        assert_eq!(LogicalOp::Not.keyword(), "NOT");
    }
}
