//! Unit tests for the parser module.
//!
//! Covers precedence and associativity, primaries, the postfix access
//! grammar, object literals and syntax errors.

use crate::{
    ast::ast::{Node, NodeType},
    lexer::{
        lexer::{create_tokenizer, Tokenizer},
        tokens::TokenKind,
    },
};

use super::{lookups::BindingPower, parser::{parse, Parser}};

fn parse_ok(source: &str) -> Node {
    match parse(source, Some("test.expr".to_string())) {
        Ok(node) => node,
        Err(error) => panic!("{:?} failed to parse: {}", source, error),
    }
}

fn render(source: &str) -> String {
    parse_ok(source).to_string()
}

fn assert_syntax_error(source: &str, found: &str) {
    let error = parse(source, None).unwrap_err();

    assert_eq!(error.get_error_name(), "SyntaxError", "for {:?}", source);
    assert!(
        error.get_message().starts_with(&format!("Found {}, expected", found)),
        "unexpected message for {:?}: {}",
        source,
        error.get_message()
    );
}

#[test]
fn test_primitive_literals_are_leaves() {
    for (source, kind) in [
        ("42", TokenKind::Number),
        ("3.5", TokenKind::Number),
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("null", TokenKind::Null),
    ] {
        match parse_ok(source) {
            Node::Leaf(token) => {
                assert_eq!(token.kind, kind);
                assert_eq!(token.value, source);
            }
            other => panic!("Expected leaf for {:?}, got {:?}", source, other),
        }
    }
}

#[test]
fn test_string_literal_is_leaf() {
    let node = parse_ok("'hello'");

    assert!(node.is_leaf());
    assert_eq!(node.get_token().value, "'hello'");
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    match parse_ok("1 + 2 * 3") {
        Node::BinOp { operator, left, right } => {
            assert_eq!(operator.kind, TokenKind::Plus);
            assert_eq!(left.get_token().value, "1");
            assert_eq!(right.get_token().kind, TokenKind::Star);
        }
        other => panic!("Expected addition, got {:?}", other),
    }

    match parse_ok("2 * 3 + 1") {
        Node::BinOp { operator, left, right } => {
            assert_eq!(operator.kind, TokenKind::Plus);
            assert_eq!(left.get_token().kind, TokenKind::Star);
            assert_eq!(right.get_token().value, "1");
        }
        other => panic!("Expected addition, got {:?}", other),
    }
}

#[test]
fn test_and_binds_tighter_than_or() {
    match parse_ok("a || b && c") {
        Node::BinOp { operator, left, right } => {
            assert_eq!(operator.kind, TokenKind::Or);
            assert_eq!(left.get_node_type(), NodeType::Builtin);
            assert_eq!(left.get_token().value, "a");
            assert_eq!(right.get_token().kind, TokenKind::And);
        }
        other => panic!("Expected ||, got {:?}", other),
    }
}

#[test]
fn test_full_precedence_ladder() {
    assert_eq!(
        render("a || b && c in d == e < f + g * h ** i"),
        "(a || (b && (c in (d == (e < (f + (g * (h ** i))))))))"
    );
    assert_eq!(
        render("a ** b * c + d < e == f in g && h || i"),
        "((((((((a ** b) * c) + d) < e) == f) in g) && h) || i)"
    );
}

#[test]
fn test_left_associative_levels() {
    assert_eq!(render("1 - 2 - 3"), "((1 - 2) - 3)");
    assert_eq!(render("8 / 4 / 2"), "((8 / 4) / 2)");
    assert_eq!(render("a == b != c"), "((a == b) != c)");
    assert_eq!(render("a < b >= c"), "((a < b) >= c)");
    assert_eq!(render("a in b in c"), "((a in b) in c)");
    assert_eq!(render("a || b || c"), "((a || b) || c)");
}

#[test]
fn test_exponent_is_right_associative() {
    match parse_ok("2 ** 3 ** 2") {
        Node::BinOp { operator, left, right } => {
            assert_eq!(operator.kind, TokenKind::StarStar);
            assert_eq!(left.get_token().value, "2");
            assert_eq!(right.to_string(), "(3 ** 2)");
        }
        other => panic!("Expected exponent, got {:?}", other),
    }

    assert_eq!(render("2 ** 3 ** 4 ** 5"), "(2 ** (3 ** (4 ** 5)))");
}

#[test]
fn test_parentheses_override_precedence() {
    match parse_ok("(1 + 2) * 3") {
        Node::BinOp { operator, left, right } => {
            assert_eq!(operator.kind, TokenKind::Star);
            assert_eq!(left.to_string(), "(1 + 2)");
            assert_eq!(right.get_token().value, "3");
        }
        other => panic!("Expected multiplication, got {:?}", other),
    }

    assert_eq!(render("(2 ** 3) ** 2"), "((2 ** 3) ** 2)");
}

#[test]
fn test_unary_operators() {
    assert_eq!(render("-x"), "(-x)");
    assert_eq!(render("!!flag"), "(!(!flag))");
    assert_eq!(render("+1 - -2"), "((+1) - (-2))");
    // Unary applies to the factor, before `**`
    assert_eq!(render("-2 ** 2"), "((-2) ** 2)");
}

#[test]
fn test_reference_and_call_are_distinct() {
    match parse_ok("f") {
        Node::Builtin { name, args } => {
            assert_eq!(name.value, "f");
            assert!(args.is_none());
        }
        other => panic!("Expected builtin, got {:?}", other),
    }

    match parse_ok("f()") {
        Node::Builtin { name, args } => {
            assert_eq!(name.value, "f");
            assert_eq!(args, Some(vec![]));
        }
        other => panic!("Expected builtin, got {:?}", other),
    }

    assert_ne!(parse_ok("f"), parse_ok("f()"));
    assert!(!parse_ok("f").is_call());
    assert!(parse_ok("f()").is_call());
}

#[test]
fn test_call_arguments() {
    match parse_ok("max(1, a + 2, [3])") {
        Node::Builtin { args: Some(args), .. } => {
            assert_eq!(args.len(), 3);
            assert_eq!(args[1].to_string(), "(a + 2)");
            assert_eq!(args[2].get_node_type(), NodeType::List);
        }
        other => panic!("Expected call, got {:?}", other),
    }
}

#[test]
fn test_dotted_access_is_left_associative() {
    match parse_ok("a.b.c") {
        Node::BinOp { operator, left, right } => {
            assert_eq!(operator.kind, TokenKind::Dot);
            assert!(right.is_leaf());
            assert_eq!(right.get_token().value, "c");

            match *left {
                Node::BinOp { operator, left, right } => {
                    assert_eq!(operator.kind, TokenKind::Dot);
                    assert_eq!(left.get_node_type(), NodeType::Builtin);
                    assert_eq!(right.get_token().value, "b");
                }
                other => panic!("Expected inner access, got {:?}", other),
            }
        }
        other => panic!("Expected dotted access, got {:?}", other),
    }
}

#[test]
fn test_dotted_access_after_call() {
    assert_eq!(render("user(1).name.first"), "((user(1) . name) . first)");
}

#[test]
fn test_dotted_access_requires_identifier() {
    assert_syntax_error("a.1", "1");
    assert_syntax_error("a.", "EOF");
}

#[test]
fn test_index_access() {
    match parse_ok("a[1]") {
        Node::ArrayAccess { target, is_interval, left, right, .. } => {
            assert!(!is_interval);
            assert_eq!(target.get_token().value, "a");
            assert_eq!(left.map(|node| node.to_string()), Some("1".to_string()));
            assert!(right.is_none());
        }
        other => panic!("Expected access, got {:?}", other),
    }
}

#[test]
fn test_slice_bounds() {
    let bounds = |source: &str| match parse_ok(source) {
        Node::ArrayAccess { is_interval, left, right, .. } => {
            assert!(is_interval, "{:?} should be a slice", source);
            (left.map(|node| node.to_string()), right.map(|node| node.to_string()))
        }
        other => panic!("Expected slice, got {:?}", other),
    };

    assert_eq!(bounds("a[1:2]"), (Some("1".to_string()), Some("2".to_string())));
    assert_eq!(bounds("a[:2]"), (None, Some("2".to_string())));
    assert_eq!(bounds("a[1:]"), (Some("1".to_string()), None));
    assert_eq!(bounds("a[:]"), (None, None));
    assert_eq!(bounds("a[i + 1:n - 1]"), (Some("(i + 1)".to_string()), Some("(n - 1)".to_string())));
}

#[test]
fn test_chained_suffixes() {
    match parse_ok("a[0][1:]") {
        Node::ArrayAccess { target, is_interval, left, right, .. } => {
            assert!(is_interval);
            assert_eq!(left.map(|node| node.to_string()), Some("1".to_string()));
            assert!(right.is_none());

            match *target {
                Node::ArrayAccess { target, is_interval, left, .. } => {
                    assert!(!is_interval);
                    assert_eq!(left.map(|node| node.to_string()), Some("0".to_string()));
                    assert!(matches!(*target, Node::Builtin { args: None, .. }));
                }
                other => panic!("Expected inner access, got {:?}", other),
            }
        }
        other => panic!("Expected outer access, got {:?}", other),
    }
}

#[test]
fn test_each_suffix_starts_fresh() {
    match parse_ok("a[1:2][3]") {
        Node::ArrayAccess { is_interval, left, right, .. } => {
            assert!(!is_interval);
            assert_eq!(left.map(|node| node.to_string()), Some("3".to_string()));
            assert!(right.is_none());
        }
        other => panic!("Expected access, got {:?}", other),
    }
}

#[test]
fn test_postfix_on_strings_lists_and_members() {
    assert_eq!(render("'hello'[1:3]"), "'hello'[1:3]");
    assert_eq!(render("[1, 2, 3][0]"), "[1, 2, 3][0]");
    assert_eq!(render("a.b[0]"), "(a . b)[0]");
    assert_eq!(render("f(x)[0][1]"), "f(x)[0][1]");
}

#[test]
fn test_list_literals() {
    match parse_ok("[]") {
        Node::List { elements, .. } => assert!(elements.is_empty()),
        other => panic!("Expected list, got {:?}", other),
    }

    assert_eq!(render("[1, 'two', [3], {a: 4}]"), "[1, 'two', [3], {a: 4}]");
}

#[test]
fn test_list_rejects_trailing_comma() {
    assert_syntax_error("[1, 2,]", "]");
    assert_syntax_error("f(1,)", ")");
}

#[test]
fn test_object_key_normalization() {
    match parse_ok("{'x': 1, x: 2}") {
        Node::Object { fields, .. } => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields["x"].get_token().value, "2");
        }
        other => panic!("Expected object, got {:?}", other),
    }
}

#[test]
fn test_object_literals() {
    match parse_ok("{}") {
        Node::Object { fields, .. } => assert!(fields.is_empty()),
        other => panic!("Expected object, got {:?}", other),
    }

    match parse_ok("{name: user.name, \"full name\": f(a, b), n: 1 + 2}") {
        Node::Object { fields, .. } => {
            let keys: Vec<&str> = fields.keys().map(|key| key.as_str()).collect();
            assert_eq!(keys, vec!["name", "full name", "n"]);
            assert_eq!(fields["n"].to_string(), "(1 + 2)");
        }
        other => panic!("Expected object, got {:?}", other),
    }
}

#[test]
fn test_object_suffixes() {
    assert_eq!(render("{a: {b: 1}}.a.b"), "(({a: {b: 1}} . a) . b)");
    assert_eq!(render("{a: [1, 2]}.a[0]"), "({a: [1, 2]} . a)[0]");
}

#[test]
fn test_object_errors() {
    assert_syntax_error("{1: 2}", "1");
    assert_syntax_error("{a 1}", "1");
    assert_syntax_error("{a: 1,}", "}");
    assert_syntax_error("{a: 1", "EOF");
}

#[test]
fn test_membership() {
    assert_eq!(render("'a' in tags || x"), "(('a' in tags) || x)");
    assert_eq!(render("x + 1 in [1, 2]"), "((x + 1) in [1, 2])");
}

#[test]
fn test_trailing_operator_is_syntax_error() {
    assert_syntax_error("1 +", "EOF");
}

#[test]
fn test_unclosed_parenthesis_is_syntax_error() {
    assert_syntax_error("(1 + 2", "EOF");
}

#[test]
fn test_other_syntax_errors() {
    assert_syntax_error("", "EOF");
    assert_syntax_error(")", ")");
    assert_syntax_error("a[]", "]");
    assert_syntax_error("* 2", "*");
    assert_syntax_error("in", "in");
}

#[test]
fn test_syntax_error_position() {
    let error = parse("1 + )", None).unwrap_err();
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_lexical_errors_propagate() {
    let error = parse("1 + @", None).unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");

    let tokenizer = create_tokenizer();
    let error = Parser::new(&tokenizer, "#", 0).err().unwrap();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_parse_leaves_trailing_tokens() {
    let tokenizer = create_tokenizer();
    let source = "a + b c";
    let mut parser = Parser::new(&tokenizer, source, 0).unwrap();

    let node = parser.parse().unwrap();
    assert_eq!(node.to_string(), "(a + b)");
    assert!(!parser.at_eof());
    assert_eq!(parser.current_token().value, "c");

    assert_syntax_error(source, "c");
}

#[test]
fn test_parse_from_offset() {
    let tokenizer = create_tokenizer();
    let source = "ignored; x * 2";
    let mut parser = Parser::new(&tokenizer, source, 9).unwrap();

    assert_eq!(parser.parse().unwrap().to_string(), "(x * 2)");
    assert!(parser.at_eof());
}

#[test]
fn test_consecutive_expressions_from_one_parser() {
    let tokenizer = create_tokenizer();
    let mut parser: Parser<'_, Tokenizer> = Parser::new(&tokenizer, "a b.c [1] 7", 0).unwrap();

    assert_eq!(parser.parse().unwrap().to_string(), "a");
    // Whitespace does not end the postfix chain
    assert_eq!(parser.parse().unwrap().to_string(), "(b . c)[1]");
    assert_eq!(parser.parse().unwrap().to_string(), "7");
    assert!(parser.at_eof());
}

#[test]
fn test_parsing_is_deterministic() {
    let source = "f(a.b[1:], {'k': [1, 2 ** 3]}) && !(x in y)";
    assert_eq!(parse_ok(source), parse_ok(source));
}

#[test]
fn test_binding_power_levels() {
    assert_eq!(BindingPower::Or.next(), Some(BindingPower::And));
    assert_eq!(BindingPower::Multiplicative.next(), Some(BindingPower::Exponent));
    assert_eq!(BindingPower::Exponent.next(), None);
    assert!(BindingPower::Or < BindingPower::Exponent);
    assert_eq!(BindingPower::Membership.operators(), &[TokenKind::In]);
}
