//! Dialect type catalog.
//!
//! Static per-dialect tables mapping [`AbstractType`] to native type names.
//! A type missing from a dialect's table maps to that dialect's fallback
//! type, so [`map_type`] is total.

use crate::dialect::Dialect;
use crate::schema::{AbstractType, FieldDefinition};

use AbstractType as T;

/// How a dialect implements auto-increment columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoIncrementStrategy {
    /// A column modifier keyword (`AUTO_INCREMENT`).
    InlineModifier,
    /// `GENERATED ALWAYS AS IDENTITY` on integer columns.
    GeneratedIdentity,
    /// `PRIMARY KEY AUTOINCREMENT` on the column.
    PrimaryKeyAutoincrement,
    /// A sequence plus a BEFORE INSERT trigger, emitted after the table.
    SequenceTrigger,
}

/// One row of a dialect type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry {
    /// The abstract type.
    pub ty: AbstractType,
    /// Native type name, without length.
    pub native: &'static str,
    /// Whether `(length)` follows the native name.
    pub needs_length: bool,
}

const fn entry(ty: AbstractType, native: &'static str) -> TypeEntry {
    TypeEntry {
        ty,
        native,
        needs_length: false,
    }
}

const fn sized(ty: AbstractType, native: &'static str) -> TypeEntry {
    TypeEntry {
        ty,
        native,
        needs_length: true,
    }
}

/// The type table and auto-increment strategy of one dialect.
#[derive(Debug)]
pub struct TypeCatalog {
    dialect: Dialect,
    entries: &'static [TypeEntry],
    fallback: &'static str,
    auto_increment: AutoIncrementStrategy,
}

static MYSQL: TypeCatalog = TypeCatalog {
    dialect: Dialect::MySql,
    entries: &[
        entry(T::TinyInt, "TINYINT"),
        entry(T::SmallInt, "SMALLINT"),
        entry(T::Int, "INT"),
        entry(T::BigInt, "BIGINT"),
        sized(T::Decimal, "DECIMAL"),
        sized(T::Numeric, "DECIMAL"),
        entry(T::Float, "FLOAT"),
        entry(T::Double, "DOUBLE"),
        entry(T::Boolean, "BOOLEAN"),
        sized(T::Char, "CHAR"),
        sized(T::Varchar, "VARCHAR"),
        entry(T::Text, "TEXT"),
        entry(T::Date, "DATE"),
        entry(T::Time, "TIME"),
        entry(T::DateTime, "DATETIME"),
        entry(T::Timestamp, "TIMESTAMP"),
        entry(T::Json, "JSON"),
        sized(T::Enum, "VARCHAR"),
        entry(T::Blob, "BLOB"),
        entry(T::Uuid, "CHAR(36)"),
    ],
    fallback: "VARCHAR(255)",
    auto_increment: AutoIncrementStrategy::InlineModifier,
};

static POSTGRES: TypeCatalog = TypeCatalog {
    dialect: Dialect::PostgreSql,
    entries: &[
        entry(T::TinyInt, "SMALLINT"),
        entry(T::SmallInt, "SMALLINT"),
        entry(T::Int, "INTEGER"),
        entry(T::BigInt, "BIGINT"),
        sized(T::Decimal, "NUMERIC"),
        sized(T::Numeric, "NUMERIC"),
        entry(T::Float, "REAL"),
        entry(T::Double, "DOUBLE PRECISION"),
        entry(T::Boolean, "BOOLEAN"),
        sized(T::Char, "CHAR"),
        sized(T::Varchar, "VARCHAR"),
        entry(T::Text, "TEXT"),
        entry(T::Date, "DATE"),
        entry(T::Time, "TIME"),
        entry(T::DateTime, "TIMESTAMP"),
        entry(T::Timestamp, "TIMESTAMP"),
        entry(T::Json, "JSONB"),
        sized(T::Enum, "VARCHAR"),
        entry(T::Blob, "BYTEA"),
        entry(T::Uuid, "UUID"),
    ],
    fallback: "TEXT",
    auto_increment: AutoIncrementStrategy::GeneratedIdentity,
};

// SQLite uses type affinity; everything not listed has TEXT affinity.
static SQLITE: TypeCatalog = TypeCatalog {
    dialect: Dialect::Sqlite,
    entries: &[
        entry(T::TinyInt, "INTEGER"),
        entry(T::SmallInt, "INTEGER"),
        entry(T::Int, "INTEGER"),
        entry(T::BigInt, "INTEGER"),
        entry(T::Decimal, "NUMERIC"),
        entry(T::Numeric, "NUMERIC"),
        entry(T::Float, "REAL"),
        entry(T::Double, "REAL"),
        entry(T::Boolean, "INTEGER"),
        entry(T::Blob, "BLOB"),
    ],
    fallback: "TEXT",
    auto_increment: AutoIncrementStrategy::PrimaryKeyAutoincrement,
};

static ORACLE: TypeCatalog = TypeCatalog {
    dialect: Dialect::Oracle,
    entries: &[
        entry(T::TinyInt, "NUMBER(3)"),
        entry(T::SmallInt, "NUMBER(5)"),
        entry(T::Int, "NUMBER(10)"),
        entry(T::BigInt, "NUMBER(19)"),
        sized(T::Decimal, "NUMBER"),
        sized(T::Numeric, "NUMBER"),
        entry(T::Float, "BINARY_FLOAT"),
        entry(T::Double, "BINARY_DOUBLE"),
        entry(T::Boolean, "NUMBER(1)"),
        sized(T::Char, "CHAR"),
        sized(T::Varchar, "VARCHAR2"),
        entry(T::Text, "CLOB"),
        entry(T::Date, "DATE"),
        entry(T::DateTime, "TIMESTAMP"),
        entry(T::Timestamp, "TIMESTAMP"),
        entry(T::Json, "CLOB"),
        sized(T::Enum, "VARCHAR2"),
        entry(T::Blob, "BLOB"),
        entry(T::Uuid, "VARCHAR2(36)"),
    ],
    fallback: "VARCHAR2(255)",
    auto_increment: AutoIncrementStrategy::SequenceTrigger,
};

impl TypeCatalog {
    /// Returns the catalog for `dialect`.
    #[must_use]
    pub fn for_dialect(dialect: Dialect) -> &'static Self {
        match dialect {
            Dialect::MySql => &MYSQL,
            Dialect::PostgreSql => &POSTGRES,
            Dialect::Sqlite => &SQLITE,
            Dialect::Oracle => &ORACLE,
        }
    }

    /// The dialect this catalog describes.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The native type used for anything without an explicit entry.
    #[must_use]
    pub const fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Returns the explicit entry for `ty`, if the dialect has one.
    #[must_use]
    pub fn entry(&self, ty: AbstractType) -> Option<&'static TypeEntry> {
        self.entries.iter().find(|e| e.ty == ty)
    }

    /// Native type name for `ty`, without length.
    #[must_use]
    pub fn map_type(&self, ty: AbstractType) -> &'static str {
        self.entry(ty).map_or(self.fallback, |e| e.native)
    }

    /// Whether `ty` is rendered with a `(length)` suffix.
    #[must_use]
    pub fn needs_length(&self, ty: AbstractType) -> bool {
        self.entry(ty).is_some_and(|e| e.needs_length)
    }

    /// How auto-increment columns are implemented.
    #[must_use]
    pub const fn auto_increment_strategy(&self) -> AutoIncrementStrategy {
        self.auto_increment
    }

    /// Renders the full column type of `field`, including length and, for
    /// DECIMAL-family types, scale.
    #[must_use]
    pub fn render_type(&self, field: &FieldDefinition) -> String {
        let native = self.map_type(field.ty);
        if !self.needs_length(field.ty) {
            return native.to_string();
        }
        let length = field.length.unwrap_or_else(|| field.ty.default_length());
        if field.ty.is_decimal() {
            format!("{native}({length}, {})", field.decimal_scale())
        } else {
            format!("{native}({length})")
        }
    }
}

/// Native type name of `ty` in `dialect`.
#[must_use]
pub fn map_type(ty: AbstractType, dialect: Dialect) -> &'static str {
    TypeCatalog::for_dialect(dialect).map_type(ty)
}

/// Whether `ty` takes a length in `dialect`.
#[must_use]
pub fn needs_length(ty: AbstractType, dialect: Dialect) -> bool {
    TypeCatalog::for_dialect(dialect).needs_length(ty)
}

/// Auto-increment mechanism of `dialect`.
#[must_use]
pub fn auto_increment_strategy(dialect: Dialect) -> AutoIncrementStrategy {
    TypeCatalog::for_dialect(dialect).auto_increment_strategy()
}

/// Whether a rendered native type is in the INTEGER/BIGINT family.
#[must_use]
pub fn is_integer_native(native: &str) -> bool {
    matches!(
        native.to_ascii_uppercase().as_str(),
        "SMALLINT" | "INT" | "INTEGER" | "BIGINT"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_type_is_total() {
        for dialect in Dialect::ALL {
            for ty in AbstractType::ALL {
                assert!(!map_type(ty, dialect).is_empty(), "{dialect} {ty}");
            }
        }
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(map_type(AbstractType::Varchar, Dialect::Sqlite), "TEXT");
        assert_eq!(map_type(AbstractType::Json, Dialect::Sqlite), "TEXT");
        assert_eq!(map_type(AbstractType::Time, Dialect::Oracle), "VARCHAR2(255)");
        assert!(!needs_length(AbstractType::Time, Dialect::Oracle));

        let expected = [
            (Dialect::MySql, "VARCHAR(255)"),
            (Dialect::PostgreSql, "TEXT"),
            (Dialect::Sqlite, "TEXT"),
            (Dialect::Oracle, "VARCHAR2(255)"),
        ];
        for (dialect, fallback) in expected {
            let catalog = TypeCatalog::for_dialect(dialect);
            assert_eq!(catalog.dialect(), dialect);
            assert_eq!(catalog.fallback(), fallback, "{dialect}");
        }
    }

    #[test]
    fn test_native_names() {
        assert_eq!(map_type(AbstractType::Int, Dialect::MySql), "INT");
        assert_eq!(map_type(AbstractType::Int, Dialect::PostgreSql), "INTEGER");
        assert_eq!(map_type(AbstractType::Json, Dialect::PostgreSql), "JSONB");
        assert_eq!(map_type(AbstractType::Varchar, Dialect::Oracle), "VARCHAR2");
        assert_eq!(map_type(AbstractType::BigInt, Dialect::Oracle), "NUMBER(19)");
    }

    #[test]
    fn test_needs_length() {
        assert!(needs_length(AbstractType::Varchar, Dialect::MySql));
        assert!(needs_length(AbstractType::Decimal, Dialect::PostgreSql));
        assert!(!needs_length(AbstractType::Int, Dialect::MySql));
        for ty in AbstractType::ALL {
            assert!(!needs_length(ty, Dialect::Sqlite));
        }
    }

    #[test]
    fn test_render_type() {
        let catalog = TypeCatalog::for_dialect(Dialect::Oracle);
        let price = FieldDefinition::new("price", AbstractType::Decimal).length(8);
        assert_eq!(catalog.render_type(&price), "NUMBER(8, 2)");
        assert_eq!(catalog.render_type(&price.clone().scale(4)), "NUMBER(8, 4)");

        let name = FieldDefinition::new("name", AbstractType::Varchar);
        assert_eq!(catalog.render_type(&name), "VARCHAR2(255)");

        let mysql = TypeCatalog::for_dialect(Dialect::MySql);
        let code = FieldDefinition::new("code", AbstractType::Char).length(3);
        assert_eq!(mysql.render_type(&code), "CHAR(3)");
    }

    #[test]
    fn test_strategies() {
        assert_eq!(
            auto_increment_strategy(Dialect::MySql),
            AutoIncrementStrategy::InlineModifier
        );
        assert_eq!(
            auto_increment_strategy(Dialect::PostgreSql),
            AutoIncrementStrategy::GeneratedIdentity
        );
        assert_eq!(
            auto_increment_strategy(Dialect::Sqlite),
            AutoIncrementStrategy::PrimaryKeyAutoincrement
        );
        assert_eq!(
            auto_increment_strategy(Dialect::Oracle),
            AutoIncrementStrategy::SequenceTrigger
        );
    }

    #[test]
    fn test_is_integer_native() {
        assert!(is_integer_native("INTEGER"));
        assert!(is_integer_native("bigint"));
        assert!(!is_integer_native("NUMERIC"));
        assert!(!is_integer_native("NUMBER(10)"));
    }
}
