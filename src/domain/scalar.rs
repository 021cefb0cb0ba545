// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar types and values.
//!
//! A schema leaf declares one of three [`ScalarType`]s. Resolution turns the
//! raw looked-up text into a [`ScalarValue`] of that type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type tag a property declares.
///
/// Serialized as the lowercase names `"string"`, `"number"` and `"boolean"`.
///
/// # Examples
///
/// ```
/// use envschema::domain::ScalarType;
///
/// assert_eq!(ScalarType::Number.to_string(), "number");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// Free text, trimmed of surrounding whitespace.
    String,
    /// A floating-point number.
    Number,
    /// `true` or `false`.
    Boolean,
}

impl ScalarType {
    /// Returns the lowercase name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Number => "number",
            ScalarType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete, typed configuration value.
///
/// # Examples
///
/// ```
/// use envschema::domain::{ScalarType, ScalarValue};
///
/// let value = ScalarValue::from(8080.0);
/// assert_eq!(value.scalar_type(), ScalarType::Number);
/// assert_eq!(value.as_f64(), Some(8080.0));
/// assert!(!value.is_falsy());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    /// A boolean value.
    Boolean(bool),
    /// A numeric value.
    Number(f64),
    /// A text value.
    String(String),
}

impl ScalarValue {
    /// Returns the type tag matching this value.
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            ScalarValue::String(_) => ScalarType::String,
            ScalarValue::Number(_) => ScalarType::Number,
            ScalarValue::Boolean(_) => ScalarType::Boolean,
        }
    }

    /// Returns `true` for the empty string, zero, NaN and `false`.
    pub fn is_falsy(&self) -> bool {
        match self {
            ScalarValue::String(s) => s.is_empty(),
            ScalarValue::Number(n) => *n == 0.0 || n.is_nan(),
            ScalarValue::Boolean(b) => !b,
        }
    }

    /// Returns the text if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the flag if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::String(s)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::String(s.to_string())
    }
}

impl From<f64> for ScalarValue {
    fn from(n: f64) -> Self {
        ScalarValue::Number(n)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Boolean(b)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) => write!(f, "{}", s),
            ScalarValue::Number(n) => write!(f, "{}", n),
            ScalarValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// Parser input whose shape is not known ahead of time.
///
/// Lookup sources always produce [`RawValue::Text`]; the other variants let
/// callers feed already-typed values through the same parsing rules.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    /// Textual input, such as an environment variable.
    Text(String),
    /// Numeric input.
    Number(f64),
    /// Boolean input.
    Boolean(bool),
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Boolean(b)
    }
}
