#![allow(dead_code)]

use sqlforge_core::{
    tokenize, AbstractType, Dialect, FieldDefinition, Row, SqlValue, TableDefinition, TokenKind,
};

/// Token kinds of `sql`, whitespace dropped.
pub fn kinds(sql: &str) -> Vec<TokenKind> {
    tokenize(sql)
        .into_iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .map(|t| t.kind)
        .collect()
}

/// (kind, text) pairs of `sql`, whitespace dropped.
pub fn pairs(sql: &str) -> Vec<(TokenKind, &str)> {
    tokenize(sql)
        .into_iter()
        .filter(|t| t.kind != TokenKind::Whitespace)
        .map(|t| (t.kind, t.text))
        .collect()
}

/// Concatenated token text of `sql`.
pub fn rebuild(sql: &str) -> String {
    tokenize(sql).iter().map(|t| t.text).collect()
}

pub fn row<V: Into<SqlValue> + Clone>(pairs: &[(&str, V)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone().into()))
        .collect()
}

pub fn values(pairs: &[(&str, SqlValue)]) -> Row {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

/// A table with a single auto-increment key and a mix of column types.
pub fn products(dialect: Dialect) -> TableDefinition {
    TableDefinition::new("products", dialect)
        .field(
            FieldDefinition::new("id", AbstractType::Int)
                .primary_key()
                .auto_increment(),
        )
        .field(
            FieldDefinition::new("sku", AbstractType::Varchar)
                .length(32)
                .not_null()
                .unique(),
        )
        .field(
            FieldDefinition::new("name", AbstractType::Varchar)
                .length(100)
                .not_null()
                .description("Display name"),
        )
        .field(
            FieldDefinition::new("price", AbstractType::Decimal)
                .length(10)
                .not_null(),
        )
        .field(FieldDefinition::new("in_stock", AbstractType::Boolean))
        .field(FieldDefinition::new("added_on", AbstractType::Date))
}

/// A join table with a compound primary key.
pub fn order_items(dialect: Dialect) -> TableDefinition {
    TableDefinition::new("order_items", dialect)
        .field(FieldDefinition::new("order_id", AbstractType::BigInt).primary_key())
        .field(FieldDefinition::new("product_id", AbstractType::Int).primary_key())
        .field(FieldDefinition::new("quantity", AbstractType::SmallInt).not_null())
}

pub fn product_row(id: i64, sku: &str, name: &str, price: f64) -> Row {
    values(&[
        ("id", SqlValue::from(id)),
        ("sku", SqlValue::from(sku)),
        ("name", SqlValue::from(name)),
        ("price", SqlValue::from(price)),
        ("in_stock", SqlValue::from(true)),
        ("added_on", SqlValue::from("2024-03-01")),
    ])
}

pub fn product_rows(n: i64) -> Vec<Row> {
    (1..=n)
        .map(|i| product_row(i, &format!("SKU-{i}"), &format!("Item {i}"), 1.5))
        .collect()
}

/// A value that closes a backslash-escaping literal early if left unescaped.
pub const QUOTE_BREAKOUT: &str = r"\'); DROP TABLE files; -- ";

/// A table with Windows paths, for backslash escaping.
pub fn files(dialect: Dialect) -> TableDefinition {
    TableDefinition::new("files", dialect)
        .field(
            FieldDefinition::new("path", AbstractType::Varchar)
                .length(255)
                .description(r"dir\"),
        )
        .field(FieldDefinition::new("size", AbstractType::Int))
}

pub fn file_rows() -> Vec<Row> {
    vec![
        values(&[("path", SqlValue::from(r"C:\temp\")), ("size", SqlValue::from(1))]),
        values(&[("path", SqlValue::from(QUOTE_BREAKOUT))]),
    ]
}
