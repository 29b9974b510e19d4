//! Dialect dispatch.
//!
//! A static table maps every [`Dialect`] to its DDL and DML strategy. Adding a
//! dialect means one new strategy type and one new table entry.

use tracing::debug;

use crate::ddl::CreateTableGenerator;
use crate::dialect::{Dialect, MySqlDialect, OracleDialect, PostgresDialect, SqliteDialect};
use crate::dml::InsertGenerator;
use crate::schema::{Row, TableDefinition};

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// CREATE TABLE plus any trailing statements.
    Ddl,
    /// INSERT statements for the given rows.
    Dml,
}

/// The generator pair of one dialect.
#[derive(Clone, Copy)]
pub struct DialectStrategy {
    /// The dialect served.
    pub dialect: Dialect,
    /// CREATE TABLE generator.
    pub ddl: &'static dyn CreateTableGenerator,
    /// INSERT generator.
    pub dml: &'static dyn InsertGenerator,
}

impl std::fmt::Debug for DialectStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialectStrategy")
            .field("dialect", &self.dialect)
            .finish_non_exhaustive()
    }
}

static STRATEGIES: [DialectStrategy; 4] = [
    DialectStrategy {
        dialect: Dialect::MySql,
        ddl: &MySqlDialect,
        dml: &MySqlDialect,
    },
    DialectStrategy {
        dialect: Dialect::PostgreSql,
        ddl: &PostgresDialect,
        dml: &PostgresDialect,
    },
    DialectStrategy {
        dialect: Dialect::Sqlite,
        ddl: &SqliteDialect,
        dml: &SqliteDialect,
    },
    DialectStrategy {
        dialect: Dialect::Oracle,
        ddl: &OracleDialect,
        dml: &OracleDialect,
    },
];

/// Returns the strategy pair for `dialect`, or the MySQL pair if the table
/// has no entry for it.
#[must_use]
pub fn strategy_for(dialect: Dialect) -> &'static DialectStrategy {
    STRATEGIES
        .iter()
        .find(|s| s.dialect == dialect)
        .unwrap_or(&STRATEGIES[0])
}

/// Generates SQL of `kind` for `table` in the table's own dialect. `rows` is
/// ignored for [`StatementKind::Ddl`].
#[must_use]
pub fn generate(kind: StatementKind, table: &TableDefinition, rows: &[Row]) -> String {
    let strategy = strategy_for(table.dialect);
    debug!(?kind, dialect = %strategy.dialect, table = %table.name, "dispatching");
    match kind {
        StatementKind::Ddl => strategy.ddl.generate_create_table(table),
        StatementKind::Dml => strategy.dml.generate_insert(table, rows),
    }
}

/// Generates CREATE TABLE for `table` in its dialect.
#[must_use]
pub fn generate_create_table(table: &TableDefinition) -> String {
    generate(StatementKind::Ddl, table, &[])
}

/// Generates INSERT statements for `rows` in the table's dialect.
#[must_use]
pub fn generate_insert(table: &TableDefinition, rows: &[Row]) -> String {
    generate(StatementKind::Dml, table, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::DialectSyntax;
    use crate::schema::{AbstractType, FieldDefinition};

    #[test]
    fn test_every_dialect_has_a_strategy() {
        for dialect in Dialect::ALL {
            let strategy = strategy_for(dialect);
            assert_eq!(strategy.dialect, dialect);
            assert_eq!(strategy.ddl.dialect(), dialect);
            assert_eq!(strategy.dml.dialect(), dialect);
        }
    }

    #[test]
    fn test_routes_on_table_dialect() {
        let table = TableDefinition::new("t", Dialect::Sqlite)
            .field(FieldDefinition::new("id", AbstractType::Int).primary_key());
        assert!(generate_create_table(&table).starts_with("CREATE TABLE \"t\""));

        let table = table.with_dialect(Dialect::MySql);
        assert!(generate_create_table(&table).starts_with("CREATE TABLE `t`"));
    }

    #[test]
    fn test_unknown_dialect_name_uses_mysql() {
        let table = TableDefinition::new("t", Dialect::parse_or_default("firebird"))
            .field(FieldDefinition::new("id", AbstractType::Int));
        assert!(generate_create_table(&table).contains("ENGINE=InnoDB"));
    }

    #[test]
    fn test_ddl_ignores_rows() {
        let table = TableDefinition::new("t", Dialect::PostgreSql)
            .field(FieldDefinition::new("id", AbstractType::Int));
        let rows = vec![Row::new()];
        assert_eq!(
            generate(StatementKind::Ddl, &table, &rows),
            generate_create_table(&table)
        );
        assert_eq!(generate(StatementKind::Dml, &table, &[]), "");
    }
}
