//! SQL highlighting lexer.
//!
//! This module provides a hand-written, lossless scanner that classifies SQL
//! text for syntax highlighting. It does not parse.

pub mod keywords;
mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::{tokenize, Lexer};
