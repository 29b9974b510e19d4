//! Table and field definitions.
//!
//! These are the inputs to DDL and DML generation. They are plain data:
//! generators read them and never mutate or retain them.

mod types;
mod value;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::{Result, SchemaError};

pub use types::AbstractType;
pub use value::{Row, SqlValue};

/// Default number of fractional digits for DECIMAL-family columns.
pub const DEFAULT_DECIMAL_SCALE: u32 = 2;

fn default_nullable() -> bool {
    true
}

/// A single column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Column name.
    pub name: String,
    /// Logical type.
    #[serde(rename = "type")]
    pub ty: AbstractType,
    /// Length or precision for types that take one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Scale for DECIMAL-family types; [`DEFAULT_DECIMAL_SCALE`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    /// Whether NULL is allowed.
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    /// Whether the column is (part of) the primary key.
    #[serde(default)]
    pub primary_key: bool,
    /// Whether values must be unique.
    #[serde(default)]
    pub unique: bool,
    /// Whether the database assigns values.
    #[serde(default)]
    pub auto_increment: bool,
    /// Human-readable column description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FieldDefinition {
    /// Creates a nullable column with no constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: AbstractType) -> Self {
        Self {
            name: name.into(),
            ty,
            length: None,
            scale: None,
            nullable: true,
            primary_key: false,
            unique: false,
            auto_increment: false,
            description: None,
        }
    }

    /// Sets the length or precision.
    #[must_use]
    pub const fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the DECIMAL scale.
    #[must_use]
    pub const fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Disallows NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Marks the column as primary key. Primary keys are never nullable.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    /// Marks the column as unique.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Marks the column as auto-incrementing.
    #[must_use]
    pub const fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Sets the column description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whether the column rejects NULL. A primary key always does, even if
    /// the input forgot to clear `nullable`.
    #[must_use]
    pub const fn is_not_null(&self) -> bool {
        !self.nullable || self.primary_key
    }

    /// The effective DECIMAL scale.
    #[must_use]
    pub fn decimal_scale(&self) -> u32 {
        self.scale.unwrap_or(DEFAULT_DECIMAL_SCALE)
    }

    /// Returns the description if it has visible content.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}

/// A table: a name, ordered fields and a target dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name.
    pub name: String,
    /// Fields in emitted column order.
    pub fields: Vec<FieldDefinition>,
    /// Target dialect.
    #[serde(default)]
    pub dialect: Dialect,
}

impl TableDefinition {
    /// Creates an empty table for `dialect`.
    #[must_use]
    pub fn new(name: impl Into<String>, dialect: Dialect) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            dialect,
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns a copy targeting another dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Primary key fields, in field order.
    pub fn primary_key_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(|f| f.primary_key)
    }

    /// Whether more than one field is flagged as primary key.
    #[must_use]
    pub fn has_compound_primary_key(&self) -> bool {
        self.primary_key_fields().nth(1).is_some()
    }

    /// Auto-increment fields, in field order.
    pub fn auto_increment_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(|f| f.auto_increment)
    }

    /// Checks the model invariants that generation assumes were enforced
    /// upstream.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaError`] found.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SchemaError::EmptyTableName);
        }
        if self.fields.is_empty() {
            return Err(SchemaError::NoFields(self.name.clone()));
        }

        let mut seen = HashSet::new();
        for (position, field) in self.fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(SchemaError::EmptyFieldName {
                    table: self.name.clone(),
                    position,
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    table: self.name.clone(),
                    field: field.name.clone(),
                });
            }
            if field.primary_key && field.nullable {
                return Err(SchemaError::NullablePrimaryKey {
                    table: self.name.clone(),
                    field: field.name.clone(),
                });
            }
            if field.auto_increment && !field.ty.is_integer() {
                return Err(SchemaError::AutoIncrementType {
                    table: self.name.clone(),
                    field: field.name.clone(),
                    ty: field.ty,
                });
            }
        }
        Ok(())
    }
}
