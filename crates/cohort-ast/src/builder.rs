//! Tree builders
//!
//! Pure constructors used by callers to seed new trees: the default
//! empty root, the default comparison for a field, and a compatibility
//! constructor for the flat filter state of the previous campaign UI.

use crate::{default_operator, Comparison, ComparisonOp, Expr, Group, LogicalOp};
use cohort_schema::{FieldDescriptor, FieldType, Scalar, Value};

/// Field id the legacy condition list maps to
pub const LEGACY_CONDITION_FIELD: &str = "condition";
/// Field id the legacy medication list maps to
pub const LEGACY_MEDICATION_FIELD: &str = "medication";
/// Field id the legacy specialty list maps to
pub const LEGACY_SPECIALTY_FIELD: &str = "specialty";
/// Field id the legacy geographic-area list maps to
pub const LEGACY_GEOGRAPHY_FIELD: &str = "geographic_area";

impl Group {
    /// Default root for a new tree: an `and` group with no children
    pub fn empty_and() -> Self {
        Self {
            operator: LogicalOp::And,
            expressions: Vec::new(),
        }
    }

    /// Convert the flat filter state of the legacy campaign screen
    /// into a one-level group.
    ///
    /// Each non-empty list contributes one child, in the fixed order
    /// conditions → medications → specialties → geographic areas: a
    /// single `equals` comparison for a one-element list, an `in`
    /// comparison otherwise.
    pub fn from_legacy_filter(state: &LegacyFilterState) -> Self {
        let operator = if state.match_all { LogicalOp::And } else { LogicalOp::Or };
        let lists = [
            (LEGACY_CONDITION_FIELD, &state.conditions),
            (LEGACY_MEDICATION_FIELD, &state.medications),
            (LEGACY_SPECIALTY_FIELD, &state.specialties),
            (LEGACY_GEOGRAPHY_FIELD, &state.geographic_areas),
        ];

        let expressions = lists
            .into_iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(field, values)| {
                let (operator, value) = if values.len() == 1 {
                    (ComparisonOp::Equals, Value::from(values[0].as_str()))
                } else {
                    let items: Vec<Scalar> = values.iter().map(|v| Scalar::from(v.as_str())).collect();
                    (ComparisonOp::In, Value::List(items))
                };
                Expr::comparison(field, operator, value, FieldType::String)
            })
            .collect();

        Self { operator, expressions }
    }
}

impl Comparison {
    /// Default comparison for a field: the registry's default operator
    /// for the declared type and no value yet
    pub fn for_field(field: &FieldDescriptor) -> Self {
        Self {
            field: field.id.clone(),
            operator: default_operator(field.field_type),
            value: Value::Null,
            field_type: field.field_type,
        }
    }
}

/// Flat filter state of the previous campaign screen: four string
/// lists plus an all/any flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyFilterState {
    /// Condition names
    pub conditions: Vec<String>,
    /// Medication names
    pub medications: Vec<String>,
    /// Provider specialties
    pub specialties: Vec<String>,
    /// Geographic areas
    pub geographic_areas: Vec<String>,
    /// true = every list must match (AND), false = any (OR)
    pub match_all: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_root() {
        let root = Group::empty_and();
        assert_eq!(root.operator, LogicalOp::And);
        assert!(root.expressions.is_empty());
    }

    #[test]
    fn test_default_comparison_uses_registry_default() {
        let field = FieldDescriptor::new("age", "providers.age", "Age", FieldType::Number);
        let node = Comparison::for_field(&field);
        assert_eq!(node.field, "age");
        assert_eq!(node.operator, ComparisonOp::Equals);
        assert!(node.value.is_null());
        assert_eq!(node.field_type, FieldType::Number);
    }

    #[test]
    fn test_legacy_filter_shape() {
        let state = LegacyFilterState {
            conditions: vec!["Diabetes".into()],
            medications: vec![],
            specialties: vec!["Cardiology".into(), "Oncology".into()],
            geographic_areas: vec![],
            match_all: true,
        };
        let group = Group::from_legacy_filter(&state);
        assert_eq!(group.operator, LogicalOp::And);
        assert_eq!(group.expressions.len(), 2);

        match &group.expressions[0] {
            Expr::Comparison(c) => {
                assert_eq!(c.field, LEGACY_CONDITION_FIELD);
                assert_eq!(c.operator, ComparisonOp::Equals);
                assert_eq!(c.value, Value::from("Diabetes"));
            }
            Expr::Logical(_) => panic!("expected comparison"),
        }
        match &group.expressions[1] {
            Expr::Comparison(c) => {
                assert_eq!(c.field, LEGACY_SPECIALTY_FIELD);
                assert_eq!(c.operator, ComparisonOp::In);
                assert_eq!(
                    c.value,
                    Value::List(vec![Scalar::from("Cardiology"), Scalar::from("Oncology")])
                );
            }
            Expr::Logical(_) => panic!("expected comparison"),
        }
    }

    #[test]
    fn test_legacy_filter_empty_lists_contribute_nothing() {
        let group = Group::from_legacy_filter(&LegacyFilterState::default());
        assert_eq!(group.operator, LogicalOp::Or);
        assert!(group.expressions.is_empty());
    }
}
