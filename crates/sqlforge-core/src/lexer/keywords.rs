//! Reserved words, built-in functions and type names for the supported
//! dialects.
//!
//! The lexer classifies bare words against the union of all four dialects,
//! so a word known to any of them is highlighted regardless of which dialect
//! the text was written for. Lookups are case-insensitive; every list below
//! is upper-case.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::dialect::Dialect;

/// The word lists contributed by one dialect.
#[derive(Debug, Clone, Copy)]
pub struct WordLists {
    /// Reserved words and clause keywords.
    pub keywords: &'static [&'static str],
    /// Built-in function names.
    pub functions: &'static [&'static str],
    /// Native type names.
    pub datatypes: &'static [&'static str],
}

const COMMON_KEYWORDS: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "BEGIN", "BETWEEN", "BY", "CASCADE",
    "CASE", "CHECK", "COLUMN", "COMMENT", "COMMIT", "CONSTRAINT", "CREATE", "CROSS", "DATABASE",
    "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXCEPT", "EXISTS", "FALSE",
    "FETCH", "FOR", "FOREIGN", "FROM", "FULL", "GRANT", "GROUP", "HAVING", "IF", "IN", "INDEX",
    "INNER", "INSERT", "INTERSECT", "INTO", "IS", "JOIN", "KEY", "LEFT", "LIKE", "LIMIT", "NOT",
    "NULL", "OFFSET", "ON", "OR", "ORDER", "OUTER", "PRIMARY", "REFERENCES", "REVOKE", "RIGHT",
    "ROLLBACK", "SCHEMA", "SELECT", "SET", "TABLE", "THEN", "TO", "TRANSACTION", "TRIGGER",
    "TRUE", "TRUNCATE", "UNION", "UNIQUE", "UPDATE", "USING", "VALUES", "VIEW", "WHEN", "WHERE",
    "WITH",
];

const MYSQL_KEYWORDS: &[&str] = &[
    "AUTO_INCREMENT", "CHARSET", "COLLATE", "DELAYED", "DUPLICATE", "ENGINE", "EXPLAIN",
    "FORCE", "HIGH_PRIORITY", "IGNORE", "LOCK", "LOW_PRIORITY", "MODIFY", "REGEXP", "RENAME",
    "REPLACE", "SHOW", "STRAIGHT_JOIN", "TEMPORARY", "UNLOCK", "UNSIGNED", "USE", "ZEROFILL",
];

const MYSQL_FUNCTIONS: &[&str] = &[
    "AVG", "CONCAT", "CONCAT_WS", "COUNT", "CURDATE", "CURRENT_TIMESTAMP", "DATE_ADD",
    "DATE_FORMAT", "DATE_SUB", "GROUP_CONCAT", "IFNULL", "JSON_EXTRACT", "JSON_OBJECT", "LAST_INSERT_ID",
    "LENGTH", "LOWER", "MAX", "MIN", "NOW", "ROUND", "SUBSTRING", "SUM", "UPPER", "UUID",
];

const MYSQL_DATATYPES: &[&str] = &[
    "BIGINT", "BINARY", "BLOB", "BOOL", "BOOLEAN", "CHAR", "DATE", "DATETIME", "DECIMAL",
    "DOUBLE", "ENUM", "FLOAT", "INT", "INTEGER", "JSON", "LONGBLOB", "LONGTEXT", "MEDIUMINT",
    "MEDIUMTEXT", "SMALLINT", "TEXT", "TIME", "TIMESTAMP", "TINYINT", "TINYTEXT", "VARBINARY",
    "VARCHAR", "YEAR",
];

const POSTGRES_KEYWORDS: &[&str] = &[
    "ALWAYS", "ANALYZE", "CONFLICT", "DO", "EXTENSION", "GENERATED", "IDENTITY", "ILIKE",
    "LATERAL", "MATERIALIZED", "NOTHING", "NULLS", "OVER", "PARTITION", "RETURNING", "SEQUENCE",
    "SIMILAR", "TABLESPACE", "VACUUM", "WINDOW",
];

const POSTGRES_FUNCTIONS: &[&str] = &[
    "ARRAY_AGG", "COALESCE", "CURRENT_DATE", "DATE_TRUNC", "EXTRACT", "GEN_RANDOM_UUID",
    "GENERATE_SERIES", "JSONB_AGG", "JSONB_BUILD_OBJECT", "NEXTVAL", "NULLIF", "ROW_NUMBER",
    "STRING_AGG", "TO_CHAR", "TO_JSONB", "UNNEST",
];

const POSTGRES_DATATYPES: &[&str] = &[
    "BIGSERIAL", "BIT", "BYTEA", "CIDR", "DOUBLE", "INET", "INTERVAL", "JSONB", "MONEY",
    "NUMERIC", "PRECISION", "REAL", "SERIAL", "SMALLSERIAL", "TIMESTAMPTZ", "TSVECTOR", "UUID",
    "VARBIT", "XML",
];

const SQLITE_KEYWORDS: &[&str] = &[
    "ABORT", "AUTOINCREMENT", "ATTACH", "DETACH", "FAIL", "GLOB", "PRAGMA", "RAISE", "REINDEX",
    "ROWID", "STRICT", "TEMP", "VIRTUAL", "WITHOUT",
];

const SQLITE_FUNCTIONS: &[&str] = &[
    "ABS", "CHANGES", "DATETIME", "GROUP_CONCAT", "HEX", "INSTR", "JSON_EXTRACT",
    "LAST_INSERT_ROWID", "LTRIM", "PRINTF", "RANDOM", "RTRIM", "STRFTIME", "SUBSTR", "TOTAL",
    "TRIM", "TYPEOF",
];

const SQLITE_DATATYPES: &[&str] = &["BLOB", "INTEGER", "NUMERIC", "REAL", "TEXT"];

const ORACLE_KEYWORDS: &[&str] = &[
    "CONNECT", "DUAL", "EACH", "INCREMENT", "MERGE", "MINUS", "NEW", "NOCACHE", "NOCYCLE",
    "PRIOR", "REPLACE", "ROW", "ROWNUM", "START", "SYNONYM", "SYSDATE",
];

const ORACLE_FUNCTIONS: &[&str] = &[
    "ADD_MONTHS", "DECODE", "INITCAP", "LISTAGG", "NEXTVAL", "NVL", "NVL2", "SUBSTR",
    "SYS_GUID", "TO_CHAR", "TO_DATE", "TO_NUMBER", "TO_TIMESTAMP", "TRUNC",
];

const ORACLE_DATATYPES: &[&str] = &[
    "BINARY_DOUBLE", "BINARY_FLOAT", "CLOB", "LONG", "NCHAR", "NCLOB", "NUMBER", "NVARCHAR2",
    "RAW", "ROWID", "VARCHAR2",
];

const MYSQL: WordLists = WordLists {
    keywords: MYSQL_KEYWORDS,
    functions: MYSQL_FUNCTIONS,
    datatypes: MYSQL_DATATYPES,
};

const POSTGRES: WordLists = WordLists {
    keywords: POSTGRES_KEYWORDS,
    functions: POSTGRES_FUNCTIONS,
    datatypes: POSTGRES_DATATYPES,
};

const SQLITE: WordLists = WordLists {
    keywords: SQLITE_KEYWORDS,
    functions: SQLITE_FUNCTIONS,
    datatypes: SQLITE_DATATYPES,
};

const ORACLE: WordLists = WordLists {
    keywords: ORACLE_KEYWORDS,
    functions: ORACLE_FUNCTIONS,
    datatypes: ORACLE_DATATYPES,
};

/// Returns the words specific to `dialect`.
///
/// Keywords shared by every dialect live in [`common_keywords`] and are not
/// repeated here.
#[must_use]
pub const fn for_dialect(dialect: Dialect) -> &'static WordLists {
    match dialect {
        Dialect::MySql => &MYSQL,
        Dialect::PostgreSql => &POSTGRES,
        Dialect::Sqlite => &SQLITE,
        Dialect::Oracle => &ORACLE,
    }
}

/// Returns the keywords every dialect understands.
#[must_use]
pub const fn common_keywords() -> &'static [&'static str] {
    COMMON_KEYWORDS
}

fn union(pick: fn(&WordLists) -> &'static [&'static str]) -> HashSet<&'static str> {
    Dialect::ALL
        .iter()
        .flat_map(|d| pick(for_dialect(*d)).iter().copied())
        .collect()
}

static KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = union(|w| w.keywords);
    set.extend(common_keywords().iter().copied());
    set
});

static FUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| union(|w| w.functions));

static DATATYPES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| union(|w| w.datatypes));

/// Returns true if `word` is a keyword in any dialect. `word` must already be
/// upper-case.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

/// Returns true if `word` is a built-in function in any dialect. `word` must
/// already be upper-case.
#[must_use]
pub fn is_function(word: &str) -> bool {
    FUNCTIONS.contains(word)
}

/// Returns true if `word` is a type name in any dialect. `word` must already
/// be upper-case.
#[must_use]
pub fn is_datatype(word: &str) -> bool {
    DATATYPES.contains(word)
}
