//! Error types.
//!
//! Tokenizing and generating never fail; these errors come from parsing
//! names and from the optional upstream check
//! [`TableDefinition::validate`](crate::schema::TableDefinition::validate).

/// An unknown dialect name was given to a strict parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown SQL dialect: '{0}'")]
pub struct ParseDialectError(pub String);

/// An unknown abstract column type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column type: '{0}'")]
pub struct ParseTypeError(pub String);

/// A table definition breaks one of the model invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The table has no name.
    #[error("table name must not be empty")]
    EmptyTableName,

    /// The table has no fields.
    #[error("table '{0}' has no fields")]
    NoFields(String),

    /// A field has no name.
    #[error("table '{table}' has a field with an empty name at position {position}")]
    EmptyFieldName {
        /// Table name.
        table: String,
        /// Zero-based field position.
        position: usize,
    },

    /// Two fields share a name.
    #[error("table '{table}' defines field '{field}' more than once")]
    DuplicateField {
        /// Table name.
        table: String,
        /// The repeated field name.
        field: String,
    },

    /// A primary key field is marked nullable.
    #[error("primary key field '{table}.{field}' cannot be nullable")]
    NullablePrimaryKey {
        /// Table name.
        table: String,
        /// Field name.
        field: String,
    },

    /// Auto-increment was requested on a non-integer column.
    #[error("field '{table}.{field}' of type {ty} cannot auto-increment")]
    AutoIncrementType {
        /// Table name.
        table: String,
        /// Field name.
        field: String,
        /// The offending type.
        ty: crate::schema::AbstractType,
    },
}

/// Result type for schema checks.
pub type Result<T> = std::result::Result<T, SchemaError>;
