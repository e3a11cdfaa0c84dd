//! Parameterized SQL compilation of cohort targeting criteria
//!
//! [`compile`] turns a tree into a WHERE-clause-shaped boolean
//! fragment with positional `$n` placeholders and the matching ordered
//! parameter list. Values never appear in the SQL text, so the output
//! is safe against injection; composing the fragment into a full
//! statement (and restricting what may be executed) is the caller's
//! job.
//!
//! The placeholder counter is threaded explicitly through the
//! recursion: placeholders are 1-based, strictly sequential and never
//! reused across siblings, so `params` and the indices in `sql` stay
//! in lock-step.

use cohort_ast::{Comparison, ComparisonOp, Expr, Group, LogicalOp};
use cohort_schema::{FieldCatalog, Scalar, Value};

/// Vacuous-truth fragment for an empty group: no filter matches
/// everything.
const TAUTOLOGY: &str = "1=1";

/// A compiled boolean predicate
#[derive(Debug, Clone, PartialEq)]
pub struct SqlPredicate {
    /// WHERE-clause-shaped fragment with `$n` placeholders
    pub sql: String,
    /// Bound values, in placeholder order
    pub params: Vec<Value>,
    /// Counter value after compilation; equals the start index plus
    /// `params.len()`
    pub next_param_index: usize,
}

/// Compile a tree into a parameterized SQL predicate.
///
/// `start_param_index` is the number of placeholders already consumed
/// by the caller; the first placeholder emitted here is
/// `$start_param_index + 1`. Compilation does not assume the tree has
/// been validated: an unknown field falls back to its raw id as the
/// column reference and malformed shapes degrade instead of panicking.
pub fn compile(node: &Expr, catalog: &FieldCatalog, start_param_index: usize) -> SqlPredicate {
    let mut compiler = SqlCompiler {
        catalog,
        next_index: start_param_index,
        params: Vec::new(),
    };
    let sql = compiler.node(node);
    SqlPredicate {
        sql,
        params: compiler.params,
        next_param_index: compiler.next_index,
    }
}

struct SqlCompiler<'a> {
    catalog: &'a FieldCatalog,
    next_index: usize,
    params: Vec<Value>,
}

impl SqlCompiler<'_> {
    fn node(&mut self, node: &Expr) -> String {
        match node {
            Expr::Comparison(cmp) => self.comparison(cmp),
            Expr::Logical(group) => self.group(group),
        }
    }

    fn comparison(&mut self, cmp: &Comparison) -> String {
        let column = self
            .catalog
            .get(&cmp.field)
            .map_or(cmp.field.as_str(), |field| field.storage_name.as_str())
            .to_string();

        match cmp.operator {
            ComparisonOp::IsNull => format!("{column} IS NULL"),
            ComparisonOp::IsNotNull => format!("{column} IS NOT NULL"),
            ComparisonOp::In => self.membership(&column, "IN", &cmp.value),
            ComparisonOp::NotIn => self.membership(&column, "NOT IN", &cmp.value),
            ComparisonOp::Contains => self.pattern(&column, "LIKE", &cmp.value, "%", "%"),
            ComparisonOp::NotContains => self.pattern(&column, "NOT LIKE", &cmp.value, "%", "%"),
            ComparisonOp::StartsWith => self.pattern(&column, "LIKE", &cmp.value, "", "%"),
            ComparisonOp::EndsWith => self.pattern(&column, "LIKE", &cmp.value, "%", ""),
            ComparisonOp::Equals => self.binary(&column, "=", &cmp.value),
            ComparisonOp::NotEquals => self.binary(&column, "!=", &cmp.value),
            ComparisonOp::GreaterThan => self.binary(&column, ">", &cmp.value),
            ComparisonOp::LessThan => self.binary(&column, "<", &cmp.value),
            ComparisonOp::GreaterThanEquals => self.binary(&column, ">=", &cmp.value),
            ComparisonOp::LessThanEquals => self.binary(&column, "<=", &cmp.value),
        }
    }

    fn binary(&mut self, column: &str, operator: &str, value: &Value) -> String {
        let placeholder = self.bind(value.clone());
        format!("{column} {operator} {placeholder}")
    }

    /// LIKE/NOT LIKE with the wildcard wrapping done here, at compile
    /// time, and bound as the single parameter
    fn pattern(&mut self, column: &str, operator: &str, value: &Value, prefix: &str, suffix: &str) -> String {
        let param = match value.as_scalar() {
            Some(scalar) => Value::from(format!("{prefix}{scalar}{suffix}")),
            // Not a scalar (validator-rejected shape): bind as given.
            None => value.clone(),
        };
        let placeholder = self.bind(param);
        format!("{column} {operator} {placeholder}")
    }

    /// IN/NOT IN with one freshly-allocated placeholder per element; a
    /// scalar operand is a one-element list
    fn membership(&mut self, column: &str, operator: &str, value: &Value) -> String {
        let elements: Vec<Scalar> = match value {
            Value::Scalar(scalar) => vec![scalar.clone()],
            Value::List(items) => items.clone(),
            Value::Null => Vec::new(),
        };
        if elements.is_empty() {
            // `IN ()` is not valid SQL; an empty element list matches
            // everything, like an empty group.
            return TAUTOLOGY.to_string();
        }
        let placeholders: Vec<String> = elements
            .into_iter()
            .map(|element| self.bind(Value::Scalar(element)))
            .collect();
        format!("{column} {operator} ({})", placeholders.join(", "))
    }

    fn group(&mut self, group: &Group) -> String {
        if group.expressions.is_empty() {
            return TAUTOLOGY.to_string();
        }

        if group.operator == LogicalOp::Not {
            return match group.expressions.as_slice() {
                [child] => {
                    let sql = self.node(child);
                    if wraps_self(child) {
                        format!("NOT {sql}")
                    } else {
                        format!("NOT ({sql})")
                    }
                }
                // Degraded shape (validator rejects it): negate the
                // conjunction of the children, same as the text
                // back-end.
                children => {
                    let compiled: Vec<String> = children.iter().map(|c| self.node(c)).collect();
                    format!("NOT ({})", compiled.join(" AND "))
                }
            };
        }

        let compiled: Vec<String> = group.expressions.iter().map(|c| self.node(c)).collect();
        if compiled.len() == 1 {
            compiled.into_iter().next().unwrap_or_default()
        } else {
            format!("({})", compiled.join(&format!(" {} ", group.operator.keyword())))
        }
    }

    /// Allocate the next sequential placeholder and bind a value to it
    fn bind(&mut self, value: Value) -> String {
        self.next_index += 1;
        self.params.push(value);
        format!("${}", self.next_index)
    }
}

/// Whether a node compiles with its own surrounding parentheses
fn wraps_self(node: &Expr) -> bool {
    matches!(
        node,
        Expr::Logical(group)
            if !matches!(group.operator, LogicalOp::Not) && group.expressions.len() > 1
    )
}
