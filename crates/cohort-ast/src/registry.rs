//! Type→operator compatibility table
//!
//! Total and pure: every field type maps to a fixed, ordered operator
//! set, and the first entry is the default operator used when seeding
//! a new comparison.

use crate::ComparisonOp;
use cohort_schema::FieldType;

use ComparisonOp::{
    Contains, EndsWith, Equals, GreaterThan, GreaterThanEquals, In, IsNotNull, IsNull, LessThan,
    LessThanEquals, NotContains, NotEquals, NotIn, StartsWith,
};

const STRING_OPS: &[ComparisonOp] = &[
    Equals, NotEquals, Contains, NotContains, StartsWith, EndsWith, In, NotIn, IsNull, IsNotNull,
];

const NUMBER_OPS: &[ComparisonOp] = &[
    Equals, NotEquals, GreaterThan, LessThan, GreaterThanEquals, LessThanEquals, In, NotIn, IsNull,
    IsNotNull,
];

const BOOLEAN_OPS: &[ComparisonOp] = &[Equals, NotEquals, IsNull, IsNotNull];

const DATE_OPS: &[ComparisonOp] = &[
    Equals, NotEquals, GreaterThan, LessThan, GreaterThanEquals, LessThanEquals, IsNull, IsNotNull,
];

const ARRAY_OPS: &[ComparisonOp] = &[Contains, NotContains, IsNull, IsNotNull];

const OBJECT_OPS: &[ComparisonOp] = &[Equals, NotEquals, IsNull, IsNotNull];

/// Get the ordered set of operators legal for a field type
pub const fn operators_for(field_type: FieldType) -> &'static [ComparisonOp] {
    match field_type {
        FieldType::String => STRING_OPS,
        FieldType::Number => NUMBER_OPS,
        FieldType::Boolean => BOOLEAN_OPS,
        FieldType::Date => DATE_OPS,
        FieldType::Array => ARRAY_OPS,
        FieldType::Object => OBJECT_OPS,
    }
}

/// Get the default operator for a field type (first registry entry)
pub const fn default_operator(field_type: FieldType) -> ComparisonOp {
    operators_for(field_type)[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [FieldType; 6] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Boolean,
        FieldType::Date,
        FieldType::Array,
        FieldType::Object,
    ];

    #[test]
    fn test_every_type_has_null_tests() {
        for field_type in ALL_TYPES {
            let ops = operators_for(field_type);
            assert!(!ops.is_empty());
            assert!(ops.contains(&IsNull), "{field_type} misses is_null");
            assert!(ops.contains(&IsNotNull), "{field_type} misses is_not_null");
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_operator(FieldType::String), Equals);
        assert_eq!(default_operator(FieldType::Array), Contains);
    }

    #[test]
    fn test_ordering_only_on_ordered_types() {
        for field_type in [FieldType::String, FieldType::Boolean, FieldType::Array, FieldType::Object] {
            assert!(!operators_for(field_type).iter().any(|op| op.is_ordering()));
        }
        for field_type in [FieldType::Number, FieldType::Date] {
            assert!(operators_for(field_type).iter().any(|op| op.is_ordering()));
        }
    }
}
