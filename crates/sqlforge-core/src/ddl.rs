//! CREATE TABLE generation.
//!
//! [`CreateTableGenerator`] holds the rules every dialect shares as default
//! methods. Dialects override the hooks where their syntax differs: table
//! options, inline comments, trailing statements, and the table-level primary
//! key constraint. Auto-increment syntax is chosen from the dialect's
//! [`AutoIncrementStrategy`].

use tracing::debug;

use crate::catalog::{is_integer_native, AutoIncrementStrategy};
use crate::dialect::DialectSyntax;
use crate::schema::{FieldDefinition, TableDefinition};

/// Quotes and escapes a string literal.
#[must_use]
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Dialect-specific CREATE TABLE generation.
pub trait CreateTableGenerator: DialectSyntax {
    /// Generates the CREATE TABLE statement followed by any statements the
    /// dialect needs after it, separated by blank lines.
    fn generate_create_table(&self, table: &TableDefinition) -> String {
        let compound = table.has_compound_primary_key();
        debug!(
            dialect = %self.dialect(),
            table = %table.name,
            fields = table.fields.len(),
            compound_primary_key = compound,
            "generating CREATE TABLE"
        );

        let mut lines: Vec<String> = table
            .fields
            .iter()
            .map(|f| format!("    {}", self.column_definition(table, f, !compound)))
            .collect();

        if compound {
            let columns: Vec<&FieldDefinition> = table.primary_key_fields().collect();
            lines.push(format!(
                "    {}",
                self.primary_key_constraint(table, &columns)
            ));
        }

        let mut sql = format!(
            "CREATE TABLE {} (\n{}\n)",
            self.quote_identifier(&table.name),
            lines.join(",\n")
        );
        if let Some(options) = self.table_options() {
            sql.push(' ');
            sql.push_str(options);
        }
        sql.push(';');

        let trailing = self.trailing_statements(table);
        if !trailing.is_empty() {
            sql.push_str("\n\n");
            sql.push_str(&trailing.join("\n\n"));
        }
        sql
    }

    /// Generates one column definition. `inline_primary_key` is false when
    /// the table uses a compound key, which is declared at table level.
    fn column_definition(
        &self,
        table: &TableDefinition,
        field: &FieldDefinition,
        inline_primary_key: bool,
    ) -> String {
        let catalog = self.catalog();
        let mut sql = format!(
            "{} {}",
            self.quote_identifier(&field.name),
            catalog.render_type(field)
        );

        if field.is_not_null() {
            sql.push_str(" NOT NULL");
        }

        let mut primary_key_done = false;
        if field.auto_increment {
            if let Some(clause) = self.auto_increment_clause(field, inline_primary_key) {
                sql.push(' ');
                sql.push_str(clause);
                primary_key_done = catalog.auto_increment_strategy()
                    == AutoIncrementStrategy::PrimaryKeyAutoincrement;
            }
        }

        if field.primary_key && inline_primary_key && !primary_key_done {
            sql.push_str(" PRIMARY KEY");
        }

        if field.unique && !field.primary_key {
            sql.push_str(" UNIQUE");
        }

        if let Some(comment) = self.column_comment(table, field) {
            sql.push(' ');
            sql.push_str(&comment);
        }

        sql
    }

    /// Inline auto-increment clause for `field`, if the dialect has one.
    ///
    /// `PRIMARY KEY AUTOINCREMENT` declares the key itself, so it is never
    /// produced inside a compound key, where keys are declared at table level.
    fn auto_increment_clause(
        &self,
        field: &FieldDefinition,
        inline_primary_key: bool,
    ) -> Option<&'static str> {
        let catalog = self.catalog();
        match catalog.auto_increment_strategy() {
            AutoIncrementStrategy::InlineModifier => Some("AUTO_INCREMENT"),
            AutoIncrementStrategy::GeneratedIdentity => {
                is_integer_native(catalog.map_type(field.ty))
                    .then_some("GENERATED ALWAYS AS IDENTITY")
            }
            AutoIncrementStrategy::PrimaryKeyAutoincrement => {
                inline_primary_key.then_some("PRIMARY KEY AUTOINCREMENT")
            }
            AutoIncrementStrategy::SequenceTrigger => None,
        }
    }

    /// Table-level primary key constraint for a compound key.
    fn primary_key_constraint(
        &self,
        _table: &TableDefinition,
        columns: &[&FieldDefinition],
    ) -> String {
        format!("PRIMARY KEY ({})", self.column_list(columns))
    }

    /// Text placed between the closing parenthesis and the semicolon.
    fn table_options(&self) -> Option<&'static str> {
        None
    }

    /// Inline column comment clause.
    fn column_comment(&self, _table: &TableDefinition, _field: &FieldDefinition) -> Option<String> {
        None
    }

    /// Complete statements emitted after CREATE TABLE.
    fn trailing_statements(&self, _table: &TableDefinition) -> Vec<String> {
        Vec::new()
    }
}
