use crate::lexer::tokens::TokenKind;

/// Precedence levels, lowest binding first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Or,
    And,
    Membership,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Exponent,
}

impl BindingPower {
    pub const LEVELS: [BindingPower; 8] = [
        BindingPower::Or,
        BindingPower::And,
        BindingPower::Membership,
        BindingPower::Equality,
        BindingPower::Relational,
        BindingPower::Additive,
        BindingPower::Multiplicative,
        BindingPower::Exponent,
    ];

    /// Operators folded at this level.
    pub fn operators(&self) -> &'static [TokenKind] {
        match self {
            BindingPower::Or => &[TokenKind::Or],
            BindingPower::And => &[TokenKind::And],
            BindingPower::Membership => &[TokenKind::In],
            BindingPower::Equality => &[TokenKind::Equals, TokenKind::NotEquals],
            BindingPower::Relational => &[
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::LessEquals,
                TokenKind::GreaterEquals,
            ],
            BindingPower::Additive => &[TokenKind::Plus, TokenKind::Dash],
            BindingPower::Multiplicative => &[TokenKind::Star, TokenKind::Slash],
            BindingPower::Exponent => &[TokenKind::StarStar],
        }
    }

    /// The next tighter level, `None` for `Exponent`.
    pub fn next(&self) -> Option<BindingPower> {
        let index = Self::LEVELS.iter().position(|level| level == self)?;
        Self::LEVELS.get(index + 1).copied()
    }
}

pub const UNARY_OPERATORS: [TokenKind; 3] = [TokenKind::Dash, TokenKind::Plus, TokenKind::Not];

pub const PRIMITIVES: [TokenKind; 4] = [
    TokenKind::Number,
    TokenKind::Null,
    TokenKind::True,
    TokenKind::False,
];
