//! SQLite dialect.

use super::{Dialect, DialectSyntax};
use crate::ddl::CreateTableGenerator;
use crate::dml::InsertGenerator;

/// SQLite dialect for DDL and DML generation.
///
/// SQLite has no column comments and no table options, so every generation
/// rule is the shared default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DialectSyntax for SqliteDialect {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }
}

impl CreateTableGenerator for SqliteDialect {}

impl InsertGenerator for SqliteDialect {}
