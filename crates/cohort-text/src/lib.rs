//! Human-readable rendering of cohort targeting criteria
//!
//! [`render`] turns a tree into a boolean expression string for
//! display, debugging or copy-to-clipboard. The output is never parsed
//! back. Rendering is defensive: an unknown field falls back to its
//! id, a malformed tree degrades instead of panicking, so a partially
//! edited tree can still be previewed live.

use cohort_ast::{Comparison, ComparisonOp, Expr, Group, LogicalOp};
use cohort_schema::{FieldCatalog, FieldType, Scalar, Value};

/// Render a tree as a human-readable boolean expression
pub fn render(node: &Expr, catalog: &FieldCatalog) -> String {
    TextRenderer::new(catalog).render(node)
}

/// Stateless renderer over one field catalog
#[derive(Debug)]
pub struct TextRenderer<'a> {
    catalog: &'a FieldCatalog,
}

impl<'a> TextRenderer<'a> {
    /// Create a renderer for a catalog
    pub fn new(catalog: &'a FieldCatalog) -> Self {
        Self { catalog }
    }

    /// Render one node (and its whole subtree)
    pub fn render(&self, node: &Expr) -> String {
        match node {
            Expr::Comparison(cmp) => self.comparison(cmp),
            Expr::Logical(group) => self.group(group),
        }
    }

    fn comparison(&self, cmp: &Comparison) -> String {
        let label = self
            .catalog
            .get(&cmp.field)
            .map_or(cmp.field.as_str(), |field| field.label.as_str());
        let quote_scalars = matches!(cmp.field_type, FieldType::String | FieldType::Date);

        match cmp.operator {
            ComparisonOp::Equals => format!("{label} = {}", format_value(&cmp.value, quote_scalars)),
            ComparisonOp::NotEquals => format!("{label} ≠ {}", format_value(&cmp.value, quote_scalars)),
            ComparisonOp::GreaterThan => format!("{label} > {}", format_value(&cmp.value, quote_scalars)),
            ComparisonOp::LessThan => format!("{label} < {}", format_value(&cmp.value, quote_scalars)),
            ComparisonOp::GreaterThanEquals => {
                format!("{label} ≥ {}", format_value(&cmp.value, quote_scalars))
            }
            ComparisonOp::LessThanEquals => {
                format!("{label} ≤ {}", format_value(&cmp.value, quote_scalars))
            }
            ComparisonOp::Contains => format!("{label} contains {}", format_value(&cmp.value, quote_scalars)),
            ComparisonOp::NotContains => {
                format!("{label} does not contain {}", format_value(&cmp.value, quote_scalars))
            }
            ComparisonOp::StartsWith => {
                format!("{label} starts with {}", format_value(&cmp.value, quote_scalars))
            }
            ComparisonOp::EndsWith => {
                format!("{label} ends with {}", format_value(&cmp.value, quote_scalars))
            }
            ComparisonOp::In => format!("{label} in ({})", format_elements(&cmp.value, quote_scalars)),
            ComparisonOp::NotIn => {
                format!("{label} not in ({})", format_elements(&cmp.value, quote_scalars))
            }
            ComparisonOp::IsNull => format!("{label} is null"),
            ComparisonOp::IsNotNull => format!("{label} is not null"),
        }
    }

    fn group(&self, group: &Group) -> String {
        if group.expressions.is_empty() {
            // The validator rejects this shape; rendering still must
            // not crash.
            return String::new();
        }

        if group.operator == LogicalOp::Not {
            return match group.expressions.as_slice() {
                [child] => {
                    let rendered = self.render(child);
                    if wraps_self(child) {
                        format!("NOT {rendered}")
                    } else {
                        format!("NOT ({rendered})")
                    }
                }
                // Degraded shape (validator rejects it): negate the
                // conjunction of the children, same as the SQL back-end.
                children => {
                    let joined: Vec<String> = children.iter().map(|c| self.render(c)).collect();
                    format!("NOT ({})", joined.join(" AND "))
                }
            };
        }

        let rendered: Vec<String> = group.expressions.iter().map(|c| self.render(c)).collect();
        if rendered.len() == 1 {
            rendered.into_iter().next().unwrap_or_default()
        } else {
            format!("({})", rendered.join(&format!(" {} ", group.operator.keyword())))
        }
    }
}

/// Whether a node renders with its own surrounding parentheses
fn wraps_self(node: &Expr) -> bool {
    matches!(
        node,
        Expr::Logical(group)
            if !matches!(group.operator, LogicalOp::Not) && group.expressions.len() > 1
    )
}

fn format_value(value: &Value, quote_scalars: bool) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Scalar(scalar) => format_scalar(scalar, quote_scalars),
        Value::List(items) => {
            let formatted: Vec<String> =
                items.iter().map(|item| format_scalar(item, quote_scalars)).collect();
            format!("[{}]", formatted.join(", "))
        }
    }
}

/// Comma-joined element list for the membership templates; a scalar
/// operand is treated as a one-element list
fn format_elements(value: &Value, quote_scalars: bool) -> String {
    match value {
        Value::Null => String::new(),
        Value::Scalar(scalar) => format_scalar(scalar, quote_scalars),
        Value::List(items) => {
            let formatted: Vec<String> =
                items.iter().map(|item| format_scalar(item, quote_scalars)).collect();
            formatted.join(", ")
        }
    }
}

fn format_scalar(scalar: &Scalar, quote: bool) -> String {
    if quote {
        format!("\"{scalar}\"")
    } else {
        scalar.to_string()
    }
}
