//! INSERT generation.
//!
//! [`InsertGenerator`] renders rows as one multi-row `INSERT ... VALUES`
//! statement. Columns always follow the table's field order, whatever the key
//! order of a row. Dialects override value rendering hooks (boolean literals,
//! casts) or the whole statement shape.

use tracing::debug;

use crate::dialect::DialectSyntax;
use crate::schema::{AbstractType, FieldDefinition, Row, SqlValue, TableDefinition};

/// The unquoted NULL literal.
pub const NULL: &str = "NULL";

/// Dialect-specific INSERT generation.
pub trait InsertGenerator: DialectSyntax {
    /// Generates INSERT text for `rows`. No rows yields an empty string.
    fn generate_insert(&self, table: &TableDefinition, rows: &[Row]) -> String {
        if rows.is_empty() {
            return String::new();
        }
        debug!(
            dialect = %self.dialect(),
            table = %table.name,
            rows = rows.len(),
            "generating INSERT"
        );

        let columns: Vec<&FieldDefinition> = table.fields.iter().collect();
        let values: Vec<String> = rows
            .iter()
            .map(|row| format!("({})", self.value_list(table, row)))
            .collect();

        format!(
            "INSERT INTO {} ({}) VALUES\n{};",
            self.quote_identifier(&table.name),
            self.column_list(&columns),
            values.join(",\n")
        )
    }

    /// Rendered values of one row, in field order, comma-separated.
    fn value_list(&self, table: &TableDefinition, row: &Row) -> String {
        table
            .fields
            .iter()
            .map(|f| self.render_value(f, row.get(&f.name)))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Renders one value as a SQL literal for `field`.
    fn render_value(&self, field: &FieldDefinition, value: Option<&SqlValue>) -> String {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return NULL.to_string();
        };
        if matches!(value, SqlValue::Float(f) if !f.is_finite()) {
            return NULL.to_string();
        }

        if field.ty.is_numeric() {
            return value
                .as_number_literal()
                .unwrap_or_else(|| self.quote_string(&value.to_string()));
        }
        if field.ty == AbstractType::Boolean {
            return value.as_bool().map_or_else(
                || self.quote_string(&value.to_string()),
                |b| self.render_boolean(b).to_string(),
            );
        }
        self.render_text(field, &value.to_string())
    }

    /// Renders a value of a non-numeric, non-boolean column.
    fn render_text(&self, field: &FieldDefinition, text: &str) -> String {
        let mut literal = self.quote_string(text);
        if let Some(cast) = self.cast_suffix(field.ty) {
            literal.push_str(cast);
        }
        literal
    }

    /// Boolean literal.
    fn render_boolean(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }

    /// Cast appended to quoted literals of type `ty`.
    fn cast_suffix(&self, _ty: AbstractType) -> Option<&'static str> {
        None
    }
}
