use std::fmt;

use crate::interpreter::lexer::Token;

/// Precedence tier of operands. Higher than any operator.
pub const OPERAND_PRIORITY: i8 = 3;
/// Precedence tier of brackets. Lower than any operator, so ordinary
/// precedence comparisons never pop a bracket.
pub const BRACKET_PRIORITY: i8 = -1;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, floor division.
    Div,
}

impl Operator {
    /// Maps an operator token to its operator. Returns `None` for any other
    /// token.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Star => Some(Self::Mul),
            Token::Slash => Some(Self::Div),
            _ => None,
        }
    }

    /// The character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Additive operators bind at `0`, multiplicative ones at `1`.
    #[must_use]
    pub const fn priority(self) -> i8 {
        match self {
            Self::Add | Self::Sub => 0,
            Self::Mul | Self::Div => 1,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A bracket marker with the position it was read at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `(`
    Open {
        /// 1-based position in the expression with whitespace removed.
        position: usize,
    },
    /// `)`. Part of the element model for completeness; the parser resolves a
    /// closing bracket as soon as it reads one, so it never reaches the work
    /// stack.
    Close,
}

/// A single element of an expression in postfix order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// An integer operand.
    Value(i64),
    /// A binary operator.
    Operator(Operator),
    /// A bracket marker. Only ever lives on the parser's work stack.
    Bracket(Bracket),
}

impl Element {
    /// Precedence tier used by the shunting-yard loop.
    ///
    /// # Example
    /// ```
    /// use romana::interpreter::element::{Bracket, Element, Operator};
    ///
    /// assert_eq!(Element::Operator(Operator::Add).priority(), 0);
    /// assert_eq!(Element::Operator(Operator::Div).priority(), 1);
    /// assert_eq!(Element::Bracket(Bracket::Open { position: 1 }).priority(), -1);
    /// assert_eq!(Element::Value(7).priority(), 3);
    /// ```
    #[must_use]
    pub const fn priority(&self) -> i8 {
        match self {
            Self::Value(_) => OPERAND_PRIORITY,
            Self::Operator(op) => op.priority(),
            Self::Bracket(_) => BRACKET_PRIORITY,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Bracket(Bracket::Open { .. }) => write!(f, "("),
            Self::Bracket(Bracket::Close) => write!(f, ")"),
        }
    }
}

/// Joins a postfix sequence with single spaces, e.g. `2 3 2 * +`.
#[must_use]
pub fn format_postfix(elements: &[Element]) -> String {
    elements.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
