//! Scalar row values.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar cell value supplied for INSERT generation.
///
/// Deserializes from plain JSON scalars: `null`, booleans, numbers and
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
}

/// One row of data, keyed by field name.
///
/// Key order is irrelevant; generators emit columns in table field order.
pub type Row = HashMap<String, SqlValue>;

impl SqlValue {
    /// Returns true for [`SqlValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Interprets the value as a boolean, if it has an obvious truth value.
    ///
    /// Numbers are true when non-zero; text accepts the usual spellings
    /// (`true`/`false`, `t`/`f`, `yes`/`no`, `y`/`n`, `on`/`off`, `1`/`0`).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(*b),
            Self::Int(n) => Some(*n != 0),
            #[allow(clippy::float_cmp)]
            Self::Float(f) => Some(*f != 0.0),
            Self::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
                "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
                _ => None,
            },
        }
    }

    /// Returns the value as an unquoted numeric literal, if it is one.
    ///
    /// Text is accepted when it parses as a finite number. Non-finite floats
    /// have no SQL literal and yield `None`.
    #[must_use]
    pub fn as_number_literal(&self) -> Option<String> {
        match self {
            Self::Int(n) => Some(n.to_string()),
            Self::Float(f) if f.is_finite() => Some(f.to_string()),
            Self::Bool(b) => Some(String::from(if *b { "1" } else { "0" })),
            Self::Text(s) => {
                let trimmed = s.trim();
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|_| trimmed.to_string())
            }
            Self::Null | Self::Float(_) => None,
        }
    }
}

impl fmt::Display for SqlValue {
    /// Writes the raw value, without quoting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
