//! Oracle dialect.
//!
//! Oracle has neither an inline auto-increment modifier nor a multi-row
//! `VALUES` list. Auto-increment columns get a sequence and a BEFORE INSERT
//! trigger after the table. Small batches are inserted with a single
//! `INSERT ... SELECT` over `UNION ALL` of `DUAL` rows, larger ones with one
//! statement per row.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

use super::{Dialect, DialectSyntax};
use crate::ddl::{quote_literal, CreateTableGenerator};
use crate::dml::InsertGenerator;
use crate::schema::{FieldDefinition, Row, TableDefinition};

/// Largest batch inserted with the `UNION ALL` form.
pub const ORACLE_UNION_ALL_MAX_ROWS: usize = 5;

/// Format mask passed to `TO_TIMESTAMP`.
pub const TIMESTAMP_MASK: &str = "YYYY-MM-DD HH24:MI:SS";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rewrites an ISO-8601 date or date-time into the layout of
/// [`TIMESTAMP_MASK`]. Offsets are converted to UTC.
fn normalize_timestamp(text: &str) -> Option<String> {
    let trimmed = text.trim();
    let parsed = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.naive_utc())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f").ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    Some(parsed.format(TIMESTAMP_FORMAT).to_string())
}

/// Oracle dialect for DDL and DML generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleDialect;

impl OracleDialect {
    /// Creates a new Oracle dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// `SEQ_<TABLE>_<FIELD>`.
    #[must_use]
    pub fn sequence_name(table: &TableDefinition, field: &FieldDefinition) -> String {
        format!("SEQ_{}_{}", table.name, field.name).to_uppercase()
    }

    /// `TRG_<TABLE>_<FIELD>`.
    #[must_use]
    pub fn trigger_name(table: &TableDefinition, field: &FieldDefinition) -> String {
        format!("TRG_{}_{}", table.name, field.name).to_uppercase()
    }

    fn select_list(&self, table: &TableDefinition, row: &Row) -> String {
        table
            .fields
            .iter()
            .map(|f| {
                format!(
                    "{} AS {}",
                    self.render_value(f, row.get(&f.name)),
                    self.quote_identifier(&f.name)
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl DialectSyntax for OracleDialect {
    fn dialect(&self) -> Dialect {
        Dialect::Oracle
    }
}

impl CreateTableGenerator for OracleDialect {
    fn primary_key_constraint(
        &self,
        table: &TableDefinition,
        columns: &[&FieldDefinition],
    ) -> String {
        format!(
            "CONSTRAINT PK_{} PRIMARY KEY ({})",
            table.name.to_uppercase(),
            self.column_list(columns)
        )
    }

    fn trailing_statements(&self, table: &TableDefinition) -> Vec<String> {
        let table_name = self.quote_identifier(&table.name);
        table
            .auto_increment_fields()
            .flat_map(|field| {
                let sequence = Self::sequence_name(table, field);
                [
                    format!("CREATE SEQUENCE {sequence} START WITH 1 INCREMENT BY 1;"),
                    format!(
                        "CREATE OR REPLACE TRIGGER {}\n\
                         BEFORE INSERT ON {table_name}\n\
                         FOR EACH ROW\n\
                         BEGIN\n\
                         \x20   SELECT {sequence}.NEXTVAL INTO :NEW.{} FROM DUAL;\n\
                         END;",
                        Self::trigger_name(table, field),
                        self.quote_identifier(&field.name)
                    ),
                ]
            })
            .collect()
    }
}

impl InsertGenerator for OracleDialect {
    fn generate_insert(&self, table: &TableDefinition, rows: &[Row]) -> String {
        if rows.is_empty() {
            return String::new();
        }

        let table_name = self.quote_identifier(&table.name);
        let columns: Vec<&FieldDefinition> = table.fields.iter().collect();
        let column_list = self.column_list(&columns);

        if rows.len() > ORACLE_UNION_ALL_MAX_ROWS {
            debug!(
                table = %table.name,
                rows = rows.len(),
                "generating one Oracle INSERT per row"
            );
            return rows
                .iter()
                .map(|row| {
                    format!(
                        "INSERT INTO {table_name} ({column_list}) VALUES ({});",
                        self.value_list(table, row)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
        }

        debug!(
            table = %table.name,
            rows = rows.len(),
            "generating Oracle INSERT ... SELECT FROM DUAL"
        );
        let selects: Vec<String> = rows
            .iter()
            .map(|row| format!("    SELECT {} FROM DUAL", self.select_list(table, row)))
            .collect();
        format!(
            "INSERT INTO {table_name} ({column_list})\nSELECT * FROM (\n{}\n);",
            selects.join("\n    UNION ALL\n")
        )
    }

    fn render_text(&self, field: &FieldDefinition, text: &str) -> String {
        if !field.ty.is_temporal() {
            return quote_literal(text);
        }
        let value = normalize_timestamp(text).unwrap_or_else(|| text.to_string());
        format!(
            "TO_TIMESTAMP({}, {})",
            quote_literal(&value),
            quote_literal(TIMESTAMP_MASK)
        )
    }
}
