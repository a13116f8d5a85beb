use indexmap::IndexMap;

use crate::lexer::tokens::Token;

/// Node Types
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum NodeType {
    Leaf,
    UnaryOp,
    BinOp,
    Builtin,
    List,
    ArrayAccess,
    Object,
}

/// Expression tree produced by the parser.
///
/// Every node owns its children and keeps the token that introduced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal or lone identifier.
    Leaf(Token),
    UnaryOp {
        operator: Token,
        operand: Box<Node>,
    },
    /// Binary operation. Also encodes dotted access, with `.` as the operator
    /// and a `Leaf` identifier on the right.
    BinOp {
        operator: Token,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Name reference (`args` is `None`) or call (`args` is `Some`, possibly empty).
    Builtin {
        name: Token,
        args: Option<Vec<Node>>,
    },
    List {
        token: Token,
        elements: Vec<Node>,
    },
    /// `target[left]` when `is_interval` is false, `target[left:right]` otherwise.
    /// An absent slice bound means the natural start or end of the target.
    ArrayAccess {
        token: Token,
        target: Box<Node>,
        is_interval: bool,
        left: Option<Box<Node>>,
        right: Option<Box<Node>>,
    },
    /// Keys are stored unquoted; a repeated key keeps the last value.
    Object {
        token: Token,
        fields: IndexMap<String, Node>,
    },
}

impl Node {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Node::Leaf(_) => NodeType::Leaf,
            Node::UnaryOp { .. } => NodeType::UnaryOp,
            Node::BinOp { .. } => NodeType::BinOp,
            Node::Builtin { .. } => NodeType::Builtin,
            Node::List { .. } => NodeType::List,
            Node::ArrayAccess { .. } => NodeType::ArrayAccess,
            Node::Object { .. } => NodeType::Object,
        }
    }

    /// The token that introduced this node: the literal, operator,
    /// identifier or opening bracket.
    pub fn get_token(&self) -> &Token {
        match self {
            Node::Leaf(token) => token,
            Node::UnaryOp { operator, .. } => operator,
            Node::BinOp { operator, .. } => operator,
            Node::Builtin { name, .. } => name,
            Node::List { token, .. } => token,
            Node::ArrayAccess { token, .. } => token,
            Node::Object { token, .. } => token,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Whether this is a builtin invoked with an argument list.
    pub fn is_call(&self) -> bool {
        matches!(self, Node::Builtin { args: Some(_), .. })
    }
}
