//! CLI integration tests for sqlforge.
//!
//! These tests run the binary against temporary JSON and SQL files and check
//! stdout, stderr and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const USERS_JSON: &str = r#"{
    "name": "users",
    "dialect": "postgresql",
    "fields": [
        {"name": "id", "type": "INT", "primaryKey": true, "nullable": false, "autoIncrement": true},
        {"name": "email", "type": "VARCHAR", "length": 120, "nullable": false, "description": "Login"},
        {"name": "active", "type": "BOOLEAN"}
    ]
}"#;

const ROWS_JSON: &str = r#"[
    {"id": 1, "email": "a@example.com", "active": true},
    {"id": 2, "email": "b@example.com", "active": false}
]"#;

/// Get a command for the sqlforge binary.
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("sqlforge").unwrap();
    cmd.env_remove("SQLFORGE_DIALECT");
    cmd
}

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

fn path(file: &NamedTempFile) -> &str {
    file.path().to_str().unwrap()
}

// =============================================================================
// Help
// =============================================================================

#[test]
fn test_help_shows_all_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ddl"))
        .stdout(predicate::str::contains("dml"))
        .stdout(predicate::str::contains("tokens"));
}

#[test]
fn test_ddl_help_mentions_env() {
    cmd()
        .args(["ddl", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dialect"))
        .stdout(predicate::str::contains("SQLFORGE_DIALECT"));
}

// =============================================================================
// DDL
// =============================================================================

#[test]
fn test_ddl_uses_table_dialect() {
    let table = temp_file(USERS_JSON);
    cmd()
        .args(["ddl", "--table", path(&table)])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("CREATE TABLE \"users\" ("))
        .stdout(predicate::str::contains(
            "\"id\" INTEGER NOT NULL GENERATED ALWAYS AS IDENTITY PRIMARY KEY",
        ))
        .stdout(predicate::str::contains(
            "COMMENT ON COLUMN \"users\".\"email\" IS 'Login';",
        ));
}

#[test]
fn test_ddl_dialect_flag_overrides_table() {
    let table = temp_file(USERS_JSON);
    cmd()
        .args(["ddl", "-t", path(&table), "--dialect", "mysql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("`email` VARCHAR(120) NOT NULL COMMENT 'Login'"))
        .stdout(predicate::str::contains("ENGINE=InnoDB"));
}

#[test]
fn test_ddl_dialect_from_env() {
    let table = temp_file(USERS_JSON);
    cmd()
        .env("SQLFORGE_DIALECT", "oracle")
        .args(["ddl", "--table", path(&table)])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE SEQUENCE SEQ_USERS_ID"));
}

#[test]
fn test_unknown_dialect_falls_back_to_mysql() {
    let table = temp_file(USERS_JSON);
    cmd()
        .args(["ddl", "--table", path(&table), "--dialect", "informix"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("CREATE TABLE `users`"))
        .stderr(predicate::str::contains("falling back to mysql"));
}

#[test]
fn test_invalid_table_fails() {
    let table = temp_file(r#"{"name": "empty", "fields": []}"#);
    cmd()
        .args(["ddl", "--table", path(&table)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("table 'empty' has no fields"));
}

#[test]
fn test_malformed_json_fails() {
    let table = temp_file("{ not json");
    cmd()
        .args(["ddl", "--table", path(&table)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_missing_file_fails() {
    cmd()
        .args(["ddl", "--table", "does/not/exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// =============================================================================
// DML
// =============================================================================

#[test]
fn test_dml_postgres() {
    let table = temp_file(USERS_JSON);
    let rows = temp_file(ROWS_JSON);
    cmd()
        .args(["dml", "--table", path(&table), "--rows", path(&rows)])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "INSERT INTO \"users\" (\"id\", \"email\", \"active\") VALUES\n\
             (1, 'a@example.com', TRUE),\n\
             (2, 'b@example.com', FALSE);\n",
        ));
}

#[test]
fn test_dml_oracle_union_all() {
    let table = temp_file(USERS_JSON);
    let rows = temp_file(ROWS_JSON);
    cmd()
        .args(["dml", "-t", path(&table), "-r", path(&rows), "-d", "oracle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FROM DUAL\n    UNION ALL\n"));
}

#[test]
fn test_dml_no_rows_prints_nothing() {
    let table = temp_file(USERS_JSON);
    let rows = temp_file("[]");
    cmd()
        .args(["dml", "--table", path(&table), "--rows", path(&rows)])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// Tokens
// =============================================================================

#[test]
fn test_tokens_from_stdin() {
    cmd()
        .arg("tokens")
        .write_stdin("SELECT 1;")
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "keyword\t\"SELECT\"\nwhitespace\t\" \"\nnumber\t\"1\"\nsemicolon\t\";\"\n",
        ));
}

#[test]
fn test_tokens_from_file_as_json() {
    let sql = temp_file("x = 'a'");
    let output = cmd()
        .args(["tokens", "--input", path(&sql), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let tokens: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens = tokens.as_array().unwrap();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[0]["kind"], "identifier");
    assert_eq!(tokens[2]["kind"], "operator");
    assert_eq!(tokens[4]["kind"], "string");
    assert_eq!(tokens[4]["text"], "'a'");
    assert_eq!(tokens[4]["span"]["start"], 4);
    assert_eq!(tokens[4]["span"]["end"], 7);
}

#[test]
fn test_tokens_report_unterminated_string() {
    cmd()
        .arg("tokens")
        .write_stdin("SELECT 'oops")
        .assert()
        .success()
        .stdout(predicate::str::contains("error\t\"'oops\""));
}
