//! Lexical analysis for expressions.
//!
//! Converts source text into classified tokens one at a time:
//!
//! - Tokenization using anchored regex patterns, longest match first
//! - Keyword literals (`true`, `false`, `in`, `null`) via a reserved lookup
//! - Byte-offset spans for error reporting
//! - Configurable skipping of ignorable text (whitespace by default)

pub mod lexer;
pub mod tokens;
