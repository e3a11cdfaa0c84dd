//! Composable targeting criteria for cohort campaigns
//!
//! This crate lets a caller compose arbitrary boolean targeting
//! criteria (field comparisons combined with AND/OR/NOT, arbitrarily
//! nested) and deterministically turn them into:
//! - a validated in-memory tree ([`validate`])
//! - a human-readable description ([`render`])
//! - a parameterized SQL predicate safe against injection ([`compile`])
//!
//! Trees are immutable values: the caller replaces the whole tree on
//! every edit and re-runs the three consumers, which are pure and
//! share no state.
//!
//! # Example
//!
//! ```
//! use cohort::{compile, render, validate, ComparisonOp, Expr, FieldCatalog,
//!     FieldDescriptor, FieldType};
//!
//! let catalog: FieldCatalog = [FieldDescriptor::new(
//!     "specialty", "providers.specialty", "Specialty", FieldType::String,
//! )]
//! .into_iter()
//! .collect();
//!
//! let tree = Expr::and(vec![Expr::comparison(
//!     "specialty", ComparisonOp::Equals, "Cardiology", FieldType::String,
//! )]);
//!
//! assert!(validate(&tree, &catalog).is_valid());
//! assert_eq!(render(&tree, &catalog), "Specialty = \"Cardiology\"");
//!
//! let predicate = compile(&tree, &catalog, 0);
//! assert_eq!(predicate.sql, "providers.specialty = $1");
//! ```

// Re-export all public APIs from internal crates
pub use cohort_ast as ast;
pub use cohort_schema as schema;
pub use cohort_sql as sql;
pub use cohort_text as text;
pub use cohort_validate as validation;

// Convenience re-exports
pub use cohort_ast::{
    operators_for, Comparison, ComparisonOp, Expr, Group, LegacyFilterState, LogicalOp,
};
pub use cohort_schema::{
    FieldCatalog, FieldDescriptor, FieldOption, FieldType, Scalar, SchemaError, Value,
};
pub use cohort_sql::{compile, SqlPredicate};
pub use cohort_text::{render, TextRenderer};
pub use cohort_validate::{validate, ValidationIssue, ValidationReport};
