//! Dialect-independent column types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParseTypeError;

/// A logical column type, mapped to a native type per dialect by the
/// [`catalog`](crate::catalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AbstractType {
    /// 8-bit integer.
    TinyInt,
    /// 16-bit integer.
    SmallInt,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    BigInt,
    /// Fixed-point number.
    Decimal,
    /// Fixed-point number (SQL `NUMERIC`).
    Numeric,
    /// Single-precision float.
    Float,
    /// Double-precision float.
    Double,
    /// Boolean.
    Boolean,
    /// Fixed-length string.
    Char,
    /// Variable-length string.
    Varchar,
    /// Unbounded text.
    Text,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time without zone.
    DateTime,
    /// Point in time.
    Timestamp,
    /// JSON document.
    Json,
    /// Enumerated string.
    Enum,
    /// Binary data.
    Blob,
    /// UUID.
    Uuid,
}

impl AbstractType {
    /// Every abstract type.
    pub const ALL: [Self; 20] = [
        Self::TinyInt,
        Self::SmallInt,
        Self::Int,
        Self::BigInt,
        Self::Decimal,
        Self::Numeric,
        Self::Float,
        Self::Double,
        Self::Boolean,
        Self::Char,
        Self::Varchar,
        Self::Text,
        Self::Date,
        Self::Time,
        Self::DateTime,
        Self::Timestamp,
        Self::Json,
        Self::Enum,
        Self::Blob,
        Self::Uuid,
    ];

    /// Returns the upper-case type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TinyInt => "TINYINT",
            Self::SmallInt => "SMALLINT",
            Self::Int => "INT",
            Self::BigInt => "BIGINT",
            Self::Decimal => "DECIMAL",
            Self::Numeric => "NUMERIC",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Boolean => "BOOLEAN",
            Self::Char => "CHAR",
            Self::Varchar => "VARCHAR",
            Self::Text => "TEXT",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::DateTime => "DATETIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Json => "JSON",
            Self::Enum => "ENUM",
            Self::Blob => "BLOB",
            Self::Uuid => "UUID",
        }
    }

    /// Integer types, the only ones that can auto-increment.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::TinyInt | Self::SmallInt | Self::Int | Self::BigInt
        )
    }

    /// Fixed-point types, rendered with precision and scale.
    #[must_use]
    pub const fn is_decimal(self) -> bool {
        matches!(self, Self::Decimal | Self::Numeric)
    }

    /// Types whose values are written as unquoted numbers.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_decimal() || matches!(self, Self::Float | Self::Double)
    }

    /// Date and time types that carry a date part.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::DateTime | Self::Timestamp)
    }

    /// Length used when a type needs one and the field gives none.
    #[must_use]
    pub const fn default_length(self) -> u32 {
        match self {
            Self::Char => 1,
            Self::Decimal | Self::Numeric => 10,
            _ => 255,
        }
    }
}

impl fmt::Display for AbstractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AbstractType {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let ty = match upper.as_str() {
            "INTEGER" => Self::Int,
            "BOOL" => Self::Boolean,
            "STRING" => Self::Varchar,
            other => Self::ALL
                .into_iter()
                .find(|ty| ty.name() == other)
                .ok_or_else(|| ParseTypeError(s.to_string()))?,
        };
        Ok(ty)
    }
}

impl<'de> Deserialize<'de> for AbstractType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
