//! Parser state and entry points.
//!
//! The parser pulls one token at a time from a `TokenSource` and keeps only
//! the current token; the grammar functions in `expr` drive it.

use std::mem;

use crate::{
    ast::ast::Node,
    errors::errors::Error,
    lexer::{
        lexer::{TokenSource, Tokenizer, TokenizerConfig},
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{expr::parse_expr, lookups::BindingPower};

/// Cursor over a token stream with a single token of lookahead.
pub struct Parser<'a, T: TokenSource = Tokenizer> {
    /// Supplies tokens on demand
    tokenizer: &'a T,
    /// The text being parsed
    source: &'a str,
    /// The token the grammar is looking at
    current_token: Token,
}

impl<'a, T: TokenSource> Parser<'a, T> {
    /// Creates a parser positioned at the first token at or after `offset`.
    ///
    /// Fails if that token cannot be recognised.
    pub fn new(tokenizer: &'a T, source: &'a str, offset: u32) -> Result<Self, Error> {
        let current_token = tokenizer.next(source, offset)?;

        Ok(Parser {
            tokenizer,
            source,
            current_token,
        })
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// True once only ignorable text remains.
    pub fn at_eof(&self) -> bool {
        self.current_token.kind == TokenKind::EOF
    }

    /// Consumes the current token and returns it.
    ///
    /// When `kinds` is non-empty the current token must be one of them,
    /// otherwise a syntax error is returned and nothing is consumed.
    pub fn take_token(&mut self, kinds: &[TokenKind]) -> Result<Token, Error> {
        if !kinds.is_empty() && !self.current_token.is_one_of_many(kinds) {
            return Err(self.syntax_error());
        }

        let next = self.tokenizer.next(self.source, self.current_token.span.end.0)?;
        Ok(mem::replace(&mut self.current_token, next))
    }

    /// Consumes the current token whatever its kind.
    pub fn advance(&mut self) -> Result<Token, Error> {
        self.take_token(&[])
    }

    /// Consumes a token of the given kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.take_token(&[expected_kind])
    }

    /// Syntax error pointing at the current token.
    pub fn syntax_error(&self) -> Error {
        Error::syntax(&self.current_token.value, self.get_position())
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }

    /// Parses one expression starting at the current token.
    ///
    /// The cursor is left just past the expression; anything after it is
    /// left for the caller.
    pub fn parse(&mut self) -> Result<Node, Error> {
        parse_expr(self, BindingPower::Or)
    }
}

/// Parses `source` as a single expression with the default tokenizer.
///
/// Unlike `Parser::parse`, the whole input must be consumed.
pub fn parse(source: &str, file: Option<String>) -> Result<Node, Error> {
    let tokenizer = Tokenizer::new(TokenizerConfig {
        file,
        ..TokenizerConfig::default()
    })?;
    let mut parser = Parser::new(&tokenizer, source, 0)?;

    let node = parser.parse()?;

    if !parser.at_eof() {
        return Err(parser.syntax_error());
    }

    Ok(node)
}
