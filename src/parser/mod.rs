//! Parser module for building expression trees.
//!
//! A recursive-descent parser with precedence climbing over eight
//! operator levels, plus a shared postfix grammar for calls, dotted member
//! access, indexing and slicing.
//!
//! - `lookups`: precedence levels and the operator sets of each level
//! - `parser`: the token cursor and the public entry points
//! - `expr`: one function per grammar rule

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
