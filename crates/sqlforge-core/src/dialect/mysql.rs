//! MySQL dialect.

use super::{Dialect, DialectSyntax};
use crate::ddl::CreateTableGenerator;
use crate::dml::InsertGenerator;
use crate::schema::{FieldDefinition, TableDefinition};

/// Storage engine and character set appended to every MySQL table.
pub const MYSQL_TABLE_OPTIONS: &str = "ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci";

/// Quotes a MySQL string literal.
///
/// MySQL reads `\` as an escape character inside quotes, so backslashes are
/// doubled along with single quotes.
#[must_use]
pub fn quote_mysql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "''"))
}

/// MySQL dialect for DDL and DML generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates a new MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DialectSyntax for MySqlDialect {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn quote_string(&self, value: &str) -> String {
        quote_mysql_literal(value)
    }
}

impl CreateTableGenerator for MySqlDialect {
    fn table_options(&self) -> Option<&'static str> {
        Some(MYSQL_TABLE_OPTIONS)
    }

    fn column_comment(&self, _table: &TableDefinition, field: &FieldDefinition) -> Option<String> {
        field
            .comment()
            .map(|comment| format!("COMMENT {}", self.quote_string(comment)))
    }
}

impl InsertGenerator for MySqlDialect {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AbstractType, Row, SqlValue};

    fn users() -> TableDefinition {
        TableDefinition::new("users", Dialect::MySql)
            .field(
                FieldDefinition::new("id", AbstractType::Int)
                    .primary_key()
                    .auto_increment(),
            )
            .field(
                FieldDefinition::new("email", AbstractType::Varchar)
                    .length(120)
                    .not_null()
                    .unique()
                    .description("Login e-mail"),
            )
            .field(FieldDefinition::new("balance", AbstractType::Decimal).length(12))
            .field(FieldDefinition::new("active", AbstractType::Boolean))
    }

    #[test]
    fn test_create_table() {
        assert_eq!(
            MySqlDialect.generate_create_table(&users()),
            "CREATE TABLE `users` (\n\
             \x20   `id` INT NOT NULL AUTO_INCREMENT PRIMARY KEY,\n\
             \x20   `email` VARCHAR(120) NOT NULL UNIQUE COMMENT 'Login e-mail',\n\
             \x20   `balance` DECIMAL(12, 2),\n\
             \x20   `active` BOOLEAN\n\
             ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COLLATE=utf8mb4_unicode_ci;"
        );
    }

    #[test]
    fn test_comment_is_escaped() {
        let table = TableDefinition::new("t", Dialect::MySql)
            .field(FieldDefinition::new("a", AbstractType::Text).description("user's note"));
        let sql = MySqlDialect.generate_create_table(&table);
        assert!(sql.contains("`a` TEXT COMMENT 'user''s note'"));
    }

    #[test]
    fn test_quote_mysql_literal() {
        assert_eq!(quote_mysql_literal(r"C:\temp\"), r"'C:\\temp\\'");
        assert_eq!(quote_mysql_literal(r"\'"), r"'\\'''");
        assert_eq!(quote_mysql_literal("plain"), "'plain'");
    }

    #[test]
    fn test_comment_backslash_is_escaped() {
        let table = TableDefinition::new("t", Dialect::MySql)
            .field(FieldDefinition::new("a", AbstractType::Text).description(r"dir\"));
        let sql = MySqlDialect.generate_create_table(&table);
        assert!(sql.contains(r"`a` TEXT COMMENT 'dir\\'"), "{sql}");
    }

    #[test]
    fn test_blank_description_has_no_comment() {
        let table = TableDefinition::new("t", Dialect::MySql)
            .field(FieldDefinition::new("a", AbstractType::Text).description("  "));
        assert!(!MySqlDialect.generate_create_table(&table).contains("COMMENT"));
    }

    #[test]
    fn test_insert() {
        let rows: Vec<Row> = vec![
            Row::from([
                (String::from("id"), SqlValue::from(1)),
                (String::from("email"), SqlValue::from("a@example.com")),
                (String::from("balance"), SqlValue::from(10.5)),
                (String::from("active"), SqlValue::from(true)),
            ]),
            Row::from([
                (String::from("id"), SqlValue::from(2)),
                (String::from("email"), SqlValue::from("o'brien@example.com")),
                (String::from("active"), SqlValue::from(false)),
            ]),
        ];
        assert_eq!(
            MySqlDialect.generate_insert(&users(), &rows),
            "INSERT INTO `users` (`id`, `email`, `balance`, `active`) VALUES\n\
             (1, 'a@example.com', 10.5, 1),\n\
             (2, 'o''brien@example.com', NULL, 0);"
        );
    }
}
