//! sqlforge CLI
//!
//! Command-line tool that renders JSON table definitions as CREATE TABLE and
//! INSERT statements, and splits SQL text into highlight tokens.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use sqlforge_core::{generate, tokenize, Dialect, Row, StatementKind, TableDefinition};

/// Multi-dialect SQL generation and highlighting.
#[derive(Parser)]
#[command(name = "sqlforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CREATE TABLE statement for a table definition.
    Ddl {
        /// Table definition (JSON).
        #[arg(short, long)]
        table: PathBuf,

        /// Target dialect, overriding the one in the table definition.
        #[arg(short, long, env = "SQLFORGE_DIALECT")]
        dialect: Option<String>,
    },

    /// Print INSERT statements for rows of a table.
    Dml {
        /// Table definition (JSON).
        #[arg(short, long)]
        table: PathBuf,

        /// Rows to insert (JSON array of objects).
        #[arg(short, long)]
        rows: PathBuf,

        /// Target dialect, overriding the one in the table definition.
        #[arg(short, long, env = "SQLFORGE_DIALECT")]
        dialect: Option<String>,
    },

    /// Print the highlight tokens of SQL text.
    Tokens {
        /// SQL file to read (stdin if not specified).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print tokens as a JSON array.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Ddl { table, dialect } => {
            let table = load_table(&table, dialect.as_deref())?;
            println!("{}", generate(StatementKind::Ddl, &table, &[]));
        }

        Commands::Dml {
            table,
            rows,
            dialect,
        } => {
            let table = load_table(&table, dialect.as_deref())?;
            let rows: Vec<Row> = read_json(&rows)?;
            if rows.is_empty() {
                info!("No rows given, nothing to insert.");
                return Ok(());
            }
            println!("{}", generate(StatementKind::Dml, &table, &rows));
        }

        Commands::Tokens { input, json } => {
            let source = read_source(input.as_deref())?;
            let tokens = tokenize(&source);
            debug!(tokens = tokens.len(), bytes = source.len(), "tokenized input");
            if json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                for token in &tokens {
                    println!("{}\t{:?}", token.kind, token.text);
                }
            }
        }
    }

    Ok(())
}

/// Reads and validates a table definition, applying a dialect override.
fn load_table(path: &Path, dialect: Option<&str>) -> anyhow::Result<TableDefinition> {
    let mut table: TableDefinition = read_json(path)?;
    if let Some(name) = dialect {
        table.dialect = Dialect::parse_or_default(name);
    }
    table
        .validate()
        .with_context(|| format!("invalid table definition in {}", path.display()))?;
    debug!(
        table = %table.name,
        dialect = %table.dialect,
        fields = table.fields.len(),
        "loaded table definition"
    );
    Ok(table)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn read_source(path: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = path {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .context("failed to read SQL from stdin")?;
    Ok(source)
}
