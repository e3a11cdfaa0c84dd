//! Runtime values carried by criteria
//!
//! A criterion compares a field against a [`Value`]: null, a single
//! scalar, or an ordered list of scalars (for membership operators).
//! No other shapes are valid.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// A primitive comparison value.
///
/// Dates travel as strings; whether a scalar is treated as a date is
/// decided by the declared field type, never inferred from the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean value
    Bool(bool),
    /// Numeric value (kept as a JSON number so input round-trips verbatim)
    Number(Number),
    /// String value
    String(String),
}

impl Scalar {
    /// Check if this scalar is numeric
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Check if this scalar is a boolean
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Try to get as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    /// Raw text of the scalar, without any quoting
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

/// The value slot of a comparison.
///
/// `Null` is legal only for the null-test operators; the validator
/// reports it for every other operator. Lists are the operand shape of
/// the membership operators.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value
    #[default]
    Null,
    /// A single scalar
    Scalar(Scalar),
    /// An ordered list of scalars
    List(Vec<Scalar>),
}

impl Value {
    /// Check if this value is null
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get as a single scalar
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a list of scalars
    pub fn as_list(&self) -> Option<&[Scalar]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Check that the value is numeric: a numeric scalar, or a list
    /// whose every element is numeric. Null is not numeric.
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Scalar(s) => s.is_number(),
            Self::List(items) => items.iter().all(Scalar::is_number),
        }
    }

    /// Check that the value is boolean: a boolean scalar, or a list
    /// whose every element is boolean. Null is not boolean.
    pub fn is_boolean(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Scalar(s) => s.is_bool(),
            Self::List(items) => items.iter().all(Scalar::is_bool),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Scalar(b.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Scalar(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<Vec<Scalar>> for Value {
    fn from(items: Vec<Scalar>) -> Self {
        Self::List(items)
    }
}
