//! PostgreSQL dialect.

use super::{Dialect, DialectSyntax};
use crate::ddl::{quote_literal, CreateTableGenerator};
use crate::dml::InsertGenerator;
use crate::schema::{AbstractType, TableDefinition};

/// PostgreSQL dialect for DDL and DML generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl PostgresDialect {
    /// Creates a new PostgreSQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DialectSyntax for PostgresDialect {
    fn dialect(&self) -> Dialect {
        Dialect::PostgreSql
    }
}

impl CreateTableGenerator for PostgresDialect {
    /// Column descriptions become one block of `COMMENT ON COLUMN`
    /// statements.
    fn trailing_statements(&self, table: &TableDefinition) -> Vec<String> {
        let table_name = self.quote_identifier(&table.name);
        let comments: Vec<String> = table
            .fields
            .iter()
            .filter_map(|field| {
                field.comment().map(|comment| {
                    format!(
                        "COMMENT ON COLUMN {table_name}.{} IS {};",
                        self.quote_identifier(&field.name),
                        quote_literal(comment)
                    )
                })
            })
            .collect();

        if comments.is_empty() {
            Vec::new()
        } else {
            vec![comments.join("\n")]
        }
    }
}

impl InsertGenerator for PostgresDialect {
    fn render_boolean(&self, value: bool) -> &'static str {
        if value {
            "TRUE"
        } else {
            "FALSE"
        }
    }

    fn cast_suffix(&self, ty: AbstractType) -> Option<&'static str> {
        match ty {
            AbstractType::Date | AbstractType::DateTime | AbstractType::Timestamp => {
                Some("::timestamp")
            }
            AbstractType::Json => Some("::jsonb"),
            _ => None,
        }
    }
}
