//! Target SQL dialects.
//!
//! [`Dialect`] is the closed set of supported targets. Each variant has one
//! strategy type in a submodule that implements both
//! [`CreateTableGenerator`](crate::ddl::CreateTableGenerator) and
//! [`InsertGenerator`](crate::dml::InsertGenerator).

mod mysql;
mod oracle;
mod postgres;
mod sqlite;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::catalog::TypeCatalog;
use crate::ddl::quote_literal;
use crate::error::ParseDialectError;
use crate::schema::FieldDefinition;

pub use mysql::{quote_mysql_literal, MySqlDialect, MYSQL_TABLE_OPTIONS};
pub use oracle::{OracleDialect, ORACLE_UNION_ALL_MAX_ROWS, TIMESTAMP_MASK};
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

/// A supported SQL target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// MySQL / MariaDB.
    #[default]
    MySql,
    /// PostgreSQL.
    PostgreSql,
    /// SQLite 3.
    Sqlite,
    /// Oracle Database.
    Oracle,
}

impl Dialect {
    /// Every supported dialect.
    pub const ALL: [Self; 4] = [Self::MySql, Self::PostgreSql, Self::Sqlite, Self::Oracle];

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::Sqlite => "sqlite",
            Self::Oracle => "oracle",
        }
    }

    /// Returns the identifier quote character.
    #[must_use]
    pub const fn identifier_quote(self) -> char {
        match self {
            Self::MySql => '`',
            Self::PostgreSql | Self::Sqlite | Self::Oracle => '"',
        }
    }

    /// Quotes an identifier, doubling any embedded quote character.
    #[must_use]
    pub fn quote_identifier(self, name: &str) -> String {
        let q = self.identifier_quote();
        let mut quoted = String::with_capacity(name.len() + 2);
        quoted.push(q);
        for c in name.chars() {
            if c == q {
                quoted.push(q);
            }
            quoted.push(c);
        }
        quoted.push(q);
        quoted
    }

    /// Parses a dialect name, falling back to MySQL for anything unknown.
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: ParseDialectError| {
            warn!(%err, "falling back to {}", Self::default());
            Self::default()
        })
    }
}

/// Syntax shared by the DDL and DML side of a dialect strategy.
pub trait DialectSyntax: Send + Sync {
    /// The dialect generated for.
    fn dialect(&self) -> Dialect;

    /// The dialect's type catalog.
    fn catalog(&self) -> &'static TypeCatalog {
        TypeCatalog::for_dialect(self.dialect())
    }

    /// Quotes an identifier.
    fn quote_identifier(&self, name: &str) -> String {
        self.dialect().quote_identifier(name)
    }

    /// Quotes and escapes a string literal.
    fn quote_string(&self, value: &str) -> String {
        quote_literal(value)
    }

    /// Comma-separated, quoted column names.
    fn column_list(&self, columns: &[&FieldDefinition]) -> String {
        columns
            .iter()
            .map(|f| self.quote_identifier(&f.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgresql" | "postgres" | "pg" | "pgsql" => Ok(Self::PostgreSql),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "oracle" | "oracledb" => Ok(Self::Oracle),
            _ => Err(ParseDialectError(s.to_string())),
        }
    }
}

impl Serialize for Dialect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Dialect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse_or_default(&name))
    }
}
