//! Token types produced by the highlighting lexer.

use std::fmt;

use serde::Serialize;

use super::Span;

/// Classification of a scanned span of SQL text.
///
/// Each kind maps one-to-one onto a presentation style chosen by the
/// renderer, so the set is deliberately coarse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Reserved word such as `SELECT` or `CONSTRAINT`.
    Keyword,
    /// Built-in function name such as `COUNT` or `NOW`.
    Function,
    /// Native type name such as `VARCHAR` or `JSONB`.
    Datatype,
    /// Operator from the fixed operator set.
    Operator,
    /// Numeric literal.
    Number,
    /// Single-quoted string literal.
    String,
    /// Bare or quoted identifier.
    Identifier,
    /// Line or block comment.
    Comment,
    /// Other ASCII punctuation.
    Punctuation,
    /// Malformed span (unterminated literal, bad exponent).
    Error,
    /// Run of whitespace.
    Whitespace,
    /// `(` or `)`.
    Parenthesis,
    /// `,`.
    Comma,
    /// `;`.
    Semicolon,
    /// Anything else.
    Default,
}

impl TokenKind {
    /// Returns the lowercase style name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Function => "function",
            Self::Datatype => "datatype",
            Self::Operator => "operator",
            Self::Number => "number",
            Self::String => "string",
            Self::Identifier => "identifier",
            Self::Comment => "comment",
            Self::Punctuation => "punctuation",
            Self::Error => "error",
            Self::Whitespace => "whitespace",
            Self::Parenthesis => "parenthesis",
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified slice of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// The token kind.
    pub kind: TokenKind,
    /// The exact source text covered by the token.
    pub text: &'a str,
    /// Where the token sits in the source.
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Returns true if this is an error token.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error)
    }
}
