//! Error types for tokenizing and parsing.
//!
//! - Error structures with source position information
//! - Lexical failures, syntax errors and tokenizer configuration errors
//! - Suggestions shown alongside rendered errors

pub mod errors;

#[cfg(test)]
mod tests;
