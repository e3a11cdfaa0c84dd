//! Validation for cohort targeting criteria
//!
//! [`validate`] walks a tree against a field catalog and collects
//! every problem into one flat, ordered list. Nothing here aborts
//! early or panics: once one child fails, its siblings are still
//! checked, so a caller can surface every issue at once.

use cohort_ast::{Expr, LogicalOp};
use cohort_schema::{FieldCatalog, FieldType};
use thiserror::Error;

/// One validation failure.
///
/// The display strings are the user-facing contract; callers show
/// them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// A comparison references a field id the catalog does not know
    #[error("Unknown field: {0}")]
    UnknownField(String),
    /// The operator needs a comparison value but none was given
    #[error("Value is required for this operator")]
    MissingValue,
    /// A number-typed field was compared against a non-numeric value
    #[error("A numeric value is required")]
    NonNumericValue,
    /// A boolean-typed field was compared against a non-boolean value
    #[error("A boolean value is required")]
    NonBooleanValue,
    /// A logical group has no children
    #[error("At least one expression is required")]
    EmptyGroup,
    /// A `not` group has more than one child
    #[error("NOT requires exactly one expression")]
    NonUnaryNot,
}

/// Result of validating one tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Check whether the tree passed every check
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// The collected issues, in visit order
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// The issue display strings, in visit order
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

/// Validate a tree against a field catalog
pub fn validate(node: &Expr, catalog: &FieldCatalog) -> ValidationReport {
    let mut walker = Validator {
        catalog,
        issues: Vec::new(),
    };
    walker.walk(node);
    ValidationReport { issues: walker.issues }
}

struct Validator<'a> {
    catalog: &'a FieldCatalog,
    issues: Vec<ValidationIssue>,
}

impl Validator<'_> {
    fn walk(&mut self, node: &Expr) {
        match node {
            Expr::Comparison(cmp) => {
                let field = self.catalog.get(&cmp.field);
                if field.is_none() {
                    self.issues.push(ValidationIssue::UnknownField(cmp.field.clone()));
                }
                if cmp.value.is_null() && !cmp.operator.allows_null() {
                    self.issues.push(ValidationIssue::MissingValue);
                }
                if let Some(field) = field {
                    if !cmp.value.is_null() {
                        match field.field_type {
                            FieldType::Number if !cmp.value.is_numeric() => {
                                self.issues.push(ValidationIssue::NonNumericValue);
                            }
                            FieldType::Boolean if !cmp.value.is_boolean() => {
                                self.issues.push(ValidationIssue::NonBooleanValue);
                            }
                            // String, date, array and object values are
                            // accepted as given.
                            _ => {}
                        }
                    }
                }
            }
            Expr::Logical(group) => {
                if group.expressions.is_empty() {
                    self.issues.push(ValidationIssue::EmptyGroup);
                } else if group.operator == LogicalOp::Not && group.expressions.len() != 1 {
                    self.issues.push(ValidationIssue::NonUnaryNot);
                }
                for child in &group.expressions {
                    self.walk(child);
                }
            }
        }
    }
}
