//! Canonical text form of a tree.
//!
//! Binary and unary operations are fully parenthesised so the rendered
//! string shows exactly how the parser grouped the input.

use std::fmt::{self, Display};

use super::ast::Node;

fn write_list(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", node)?;
    }

    Ok(())
}

fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(token) => write!(f, "{}", token.value),
            Node::UnaryOp { operator, operand } => write!(f, "({}{})", operator.value, operand),
            Node::BinOp { operator, left, right } => {
                write!(f, "({} {} {})", left, operator.value, right)
            }
            Node::Builtin { name, args } => {
                write!(f, "{}", name.value)?;
                if let Some(args) = args {
                    write!(f, "(")?;
                    write_list(f, args)?;
                    write!(f, ")")?;
                }
                Ok(())
            }
            Node::List { elements, .. } => {
                write!(f, "[")?;
                write_list(f, elements)?;
                write!(f, "]")
            }
            Node::ArrayAccess { target, is_interval, left, right, .. } => {
                write!(f, "{}[", target)?;
                if let Some(left) = left {
                    write!(f, "{}", left)?;
                }
                if *is_interval {
                    write!(f, ":")?;
                    if let Some(right) = right {
                        write!(f, "{}", right)?;
                    }
                }
                write!(f, "]")
            }
            Node::Object { fields, .. } => {
                write!(f, "{{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if is_bare_key(key) {
                        write!(f, "{}: {}", key, value)?;
                    } else {
                        write!(f, "'{}': {}", key, value)?;
                    }
                }
                write!(f, "}}")
            }
        }
    }
}
