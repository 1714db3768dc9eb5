#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing a postfix sequence.
pub enum RuntimeError {
    /// Operators and operands do not form a single valid expression.
    MalformedExpression,
    /// Attempted division by zero.
    DivisionByZero,
    /// The result cannot be written as a numeral.
    RomanOverflow {
        /// The value that was out of range.
        value: i64,
    },
    /// Arithmetic operation overflowed the 64-bit range.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedExpression => write!(f, "Invalid expression format"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::RomanOverflow { .. } => write!(f, "Roman number overflow"),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result"),
        }
    }
}

impl std::error::Error for RuntimeError {}
