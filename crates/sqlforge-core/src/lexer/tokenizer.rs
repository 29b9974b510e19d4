//! Highlighting tokenizer.
//!
//! The scanner never fails: every byte of the input ends up in exactly one
//! token, except when an unterminated quote, bracket or block comment is
//! found. In that case the remainder of the input becomes a single error
//! token and scanning stops. A malformed numeric exponent is reported as an
//! error token too, but scanning resumes right after it.

use std::iter::FusedIterator;

use tracing::trace;

use super::keywords::{is_datatype, is_function, is_keyword};
use super::{Span, Token, TokenKind};

/// Operators, matched longest first.
const OPERATORS: &[&str] = &[
    "->>", "!=", "<>", "<=", ">=", ":=", "||", "&&", "<<", ">>", "->", "@>", "<@", "?|", "?&",
    "::", "+", "-", "*", "/", "%", "^", "=", "<", ">", "!", "~", "&", "|", "#", "?",
];

const MAX_OPERATOR_LEN: usize = 3;

/// A lexer that splits SQL text into highlight tokens.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// Set once an unterminated literal has been reported.
    halted: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            halted: false,
        }
    }

    /// Returns true once scanning stopped on an unterminated literal.
    #[must_use]
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token<'a> {
        Token::new(kind, &self.input[start..self.pos], Span::new(start, self.pos))
    }

    /// Turns everything from `start` to the end of input into an error token
    /// and stops the lexer.
    fn halt(&mut self, start: usize) -> Token<'a> {
        self.pos = self.input.len();
        self.halted = true;
        trace!(start, "unterminated literal, tokenization halted");
        self.token(TokenKind::Error, start)
    }

    fn scan_line_comment(&mut self, start: usize) -> Token<'a> {
        self.advance_while(|c| c != '\n');
        self.token(TokenKind::Comment, start)
    }

    fn scan_block_comment(&mut self, start: usize) -> Token<'a> {
        self.pos += 2; // /*
        loop {
            if self.rest().starts_with("*/") {
                self.pos += 2;
                return self.token(TokenKind::Comment, start);
            }
            if self.advance().is_none() {
                return self.halt(start);
            }
        }
    }

    /// Scans a literal delimited by `quote`. A backslash escapes the next
    /// character, so `\'` does not close a string but `\\'` does.
    fn scan_quoted(&mut self, start: usize, quote: char, kind: TokenKind) -> Token<'a> {
        self.advance(); // opening quote
        let mut escaped = false;
        while let Some(c) = self.advance() {
            if c == quote && !escaped {
                return self.token(kind, start);
            }
            escaped = c == '\\' && !escaped;
        }
        self.halt(start)
    }

    fn scan_bracketed(&mut self, start: usize) -> Token<'a> {
        self.advance(); // [
        while let Some(c) = self.advance() {
            if c == ']' {
                return self.token(TokenKind::Identifier, start);
            }
        }
        self.halt(start)
    }

    fn scan_number(&mut self, start: usize) -> Token<'a> {
        let mut seen_dot = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' => {}
                '.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            self.advance();
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                trace!(start, end = self.pos, "exponent without digits");
                return self.token(TokenKind::Error, start);
            }
            self.advance_while(|c| c.is_ascii_digit());
        }

        self.token(TokenKind::Number, start)
    }

    /// Returns the byte length of the longest operator at the cursor.
    fn match_operator(&self) -> Option<usize> {
        let rest = self.rest();
        (1..=MAX_OPERATOR_LEN)
            .rev()
            .find(|&n| rest.get(..n).is_some_and(|head| OPERATORS.contains(&head)))
    }

    fn scan_word(&mut self, start: usize) -> Token<'a> {
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let word = self.input[start..self.pos].to_ascii_uppercase();
        let kind = if is_keyword(&word) {
            TokenKind::Keyword
        } else if is_function(&word) {
            TokenKind::Function
        } else if is_datatype(&word) {
            TokenKind::Datatype
        } else {
            TokenKind::Identifier
        };
        self.token(kind, start)
    }

    fn single(&mut self, start: usize, kind: TokenKind) -> Token<'a> {
        self.advance();
        self.token(kind, start)
    }

    /// Scans the next token, or returns `None` at end of input or after the
    /// lexer halted.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.halted {
            return None;
        }
        let start = self.pos;
        let c = self.peek()?;

        let token = match c {
            c if c.is_whitespace() => {
                self.advance_while(char::is_whitespace);
                self.token(TokenKind::Whitespace, start)
            }
            '-' if self.peek_nth(1) == Some('-') => self.scan_line_comment(start),
            '/' if self.peek_nth(1) == Some('*') => self.scan_block_comment(start),
            '\'' => self.scan_quoted(start, '\'', TokenKind::String),
            '"' => self.scan_quoted(start, '"', TokenKind::Identifier),
            '`' => self.scan_quoted(start, '`', TokenKind::Identifier),
            '[' => self.scan_bracketed(start),
            '0'..='9' => self.scan_number(start),
            '.' if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.scan_number(start)
            }
            '(' | ')' => self.single(start, TokenKind::Parenthesis),
            ',' => self.single(start, TokenKind::Comma),
            ';' => self.single(start, TokenKind::Semicolon),
            c => {
                if let Some(len) = self.match_operator() {
                    self.pos += len;
                    self.token(TokenKind::Operator, start)
                } else if c.is_ascii_alphabetic() || c == '_' {
                    self.scan_word(start)
                } else if c.is_ascii_punctuation() {
                    self.single(start, TokenKind::Punctuation)
                } else {
                    self.single(start, TokenKind::Default)
                }
            }
        };
        Some(token)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenizes `source` in one pass.
///
/// Never fails; malformed input shows up as [`TokenKind::Error`] tokens.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}
