/// AST (Abstract Syntax Tree) module
/// Contains the expression tree built by the parser
///
/// Submodules:
/// - ast: The `Node` sum type and its helpers
/// - display: Canonical, fully parenthesised rendering of a tree
pub mod ast;
pub mod display;
