use indexmap::IndexMap;

use crate::{
    ast::ast::Node,
    errors::errors::Error,
    lexer::{lexer::TokenSource, tokens::TokenKind},
};

use super::{
    lookups::{BindingPower, PRIMITIVES, UNARY_OPERATORS},
    parser::Parser,
};

/// Parses an expression whose loosest operator binds at `bp`.
pub fn parse_expr<T: TokenSource>(parser: &mut Parser<'_, T>, bp: BindingPower) -> Result<Node, Error> {
    let Some(next) = bp.next() else {
        return parse_exponent_expr(parser);
    };

    let mut left = parse_expr(parser, next)?;

    // Left-associative fold
    while parser.current_token().is_one_of_many(bp.operators()) {
        let operator = parser.advance()?;
        let right = parse_expr(parser, next)?;

        left = Node::BinOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        };
    }

    Ok(left)
}

/// `**` is right-associative: `2 ** 3 ** 2` is `2 ** (3 ** 2)`.
fn parse_exponent_expr<T: TokenSource>(parser: &mut Parser<'_, T>) -> Result<Node, Error> {
    let base = parse_factor(parser)?;

    if parser.current_token_kind() != TokenKind::StarStar {
        return Ok(base);
    }

    let operator = parser.advance()?;
    let exponent = parse_expr(parser, BindingPower::Exponent)?;

    Ok(Node::BinOp {
        operator,
        left: Box::new(base),
        right: Box::new(exponent),
    })
}

pub fn parse_factor<T: TokenSource>(parser: &mut Parser<'_, T>) -> Result<Node, Error> {
    let kind = parser.current_token_kind();

    if UNARY_OPERATORS.contains(&kind) {
        let operator = parser.advance()?;
        let operand = parse_factor(parser)?;

        return Ok(Node::UnaryOp {
            operator,
            operand: Box::new(operand),
        });
    }

    if PRIMITIVES.contains(&kind) {
        return Ok(Node::Leaf(parser.advance()?));
    }

    match kind {
        TokenKind::String => {
            let string = Node::Leaf(parser.advance()?);
            parse_value_access(parser, string)
        }
        TokenKind::OpenParen => {
            parser.advance()?;
            let expr = parser.parse()?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(expr)
        }
        TokenKind::OpenBracket => {
            let list = parse_list_expr(parser)?;
            parse_value_access(parser, list)
        }
        TokenKind::OpenCurly => {
            let object = parse_object_expr(parser)?;
            parse_value_access(parser, object)
        }
        TokenKind::Identifier => {
            let builtin = parse_builtin_expr(parser)?;
            parse_value_access(parser, builtin)
        }
        _ => Err(parser.syntax_error()),
    }
}

/// Comma separated expressions up to and including `close`.
fn parse_expr_list<T: TokenSource>(parser: &mut Parser<'_, T>, close: TokenKind) -> Result<Vec<Node>, Error> {
    let mut nodes = vec![];

    if parser.current_token_kind() != close {
        nodes.push(parser.parse()?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance()?;
            nodes.push(parser.parse()?);
        }
    }

    parser.expect(close)?;

    Ok(nodes)
}

/// Zero or more `.name` suffixes, folded left to right.
fn parse_member_chain<T: TokenSource>(parser: &mut Parser<'_, T>, mut node: Node) -> Result<Node, Error> {
    while parser.current_token_kind() == TokenKind::Dot {
        let operator = parser.advance()?;
        let member = parser.expect(TokenKind::Identifier)?;

        node = Node::BinOp {
            operator,
            left: Box::new(node),
            right: Box::new(Node::Leaf(member)),
        };
    }

    Ok(node)
}

/// `name`, `name()`, `name(a, b)`, each optionally followed by `.member`s.
pub fn parse_builtin_expr<T: TokenSource>(parser: &mut Parser<'_, T>) -> Result<Node, Error> {
    let name = parser.expect(TokenKind::Identifier)?;

    let args = if parser.current_token_kind() == TokenKind::OpenParen {
        parser.advance()?;
        Some(parse_expr_list(parser, TokenKind::CloseParen)?)
    } else {
        None
    };

    parse_member_chain(parser, Node::Builtin { name, args })
}

pub fn parse_list_expr<T: TokenSource>(parser: &mut Parser<'_, T>) -> Result<Node, Error> {
    let token = parser.expect(TokenKind::OpenBracket)?;
    let elements = parse_expr_list(parser, TokenKind::CloseBracket)?;

    Ok(Node::List { token, elements })
}

/// Applies trailing `[index]` and `[start:end]` suffixes to `node`.
pub fn parse_value_access<T: TokenSource>(parser: &mut Parser<'_, T>, mut node: Node) -> Result<Node, Error> {
    while parser.current_token_kind() == TokenKind::OpenBracket {
        let token = parser.advance()?;

        let mut left = None;
        let mut right = None;
        let mut is_interval = false;

        if parser.current_token_kind() != TokenKind::Colon {
            left = Some(Box::new(parser.parse()?));
        }

        if parser.current_token_kind() == TokenKind::Colon {
            is_interval = true;
            parser.advance()?;

            if parser.current_token_kind() != TokenKind::CloseBracket {
                right = Some(Box::new(parser.parse()?));
            }
        }

        parser.expect(TokenKind::CloseBracket)?;

        node = Node::ArrayAccess {
            token,
            target: Box::new(node),
            is_interval,
            left,
            right,
        };
    }

    Ok(node)
}

/// `{key: value, 'other key': value}` followed by optional `.member`s.
pub fn parse_object_expr<T: TokenSource>(parser: &mut Parser<'_, T>) -> Result<Node, Error> {
    let token = parser.expect(TokenKind::OpenCurly)?;
    let mut fields = IndexMap::new();

    if parser.current_token_kind() != TokenKind::CloseCurly {
        loop {
            let key = parser.take_token(&[TokenKind::String, TokenKind::Identifier])?;
            parser.expect(TokenKind::Colon)?;
            let value = parser.parse()?;

            fields.insert(key.unquoted().to_string(), value);

            if parser.current_token_kind() != TokenKind::Comma {
                break;
            }
            parser.advance()?;
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    parse_member_chain(parser, Node::Object { token, fields })
}
