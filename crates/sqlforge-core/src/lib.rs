//! # sqlforge-core
//!
//! A SQL highlighting lexer and a multi-dialect SQL generator.
//!
//! This crate provides:
//! - A lossless lexer that classifies SQL text for syntax highlighting
//! - A type catalog mapping abstract column types to MySQL, PostgreSQL,
//!   SQLite and Oracle native types
//! - CREATE TABLE and bulk INSERT generation for each of those dialects
//!
//! ## Tokenizing
//!
//! ```rust
//! use sqlforge_core::{tokenize, TokenKind};
//!
//! let tokens = tokenize("SELECT COUNT(*) FROM users;");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[2].kind, TokenKind::Function);
//!
//! // Concatenating the token text gives back the source.
//! let text: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(text, "SELECT COUNT(*) FROM users;");
//! ```
//!
//! ## Generating SQL
//!
//! ```rust
//! use sqlforge_core::{generate_create_table, AbstractType, Dialect, FieldDefinition, TableDefinition};
//!
//! let table = TableDefinition::new("users", Dialect::PostgreSql)
//!     .field(FieldDefinition::new("id", AbstractType::BigInt).primary_key().auto_increment())
//!     .field(FieldDefinition::new("email", AbstractType::Varchar).length(120).not_null());
//!
//! assert_eq!(
//!     generate_create_table(&table),
//!     "CREATE TABLE \"users\" (\n    \
//!      \"id\" BIGINT NOT NULL GENERATED ALWAYS AS IDENTITY PRIMARY KEY,\n    \
//!      \"email\" VARCHAR(120) NOT NULL\n);"
//! );
//! ```

pub mod catalog;
pub mod ddl;
pub mod dialect;
pub mod dispatch;
pub mod dml;
pub mod error;
pub mod lexer;
pub mod schema;

pub use catalog::{map_type, AutoIncrementStrategy, TypeCatalog};
pub use ddl::CreateTableGenerator;
pub use dialect::{
    Dialect, DialectSyntax, MySqlDialect, OracleDialect, PostgresDialect, SqliteDialect,
};
pub use dispatch::{generate, generate_create_table, generate_insert, strategy_for, StatementKind};
pub use dml::InsertGenerator;
pub use error::{ParseDialectError, ParseTypeError, SchemaError};
pub use lexer::{tokenize, Lexer, Span, Token, TokenKind};
pub use schema::{AbstractType, FieldDefinition, Row, SqlValue, TableDefinition};
