use crate::error::{ParseError, RuntimeError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure produced while evaluating one expression.
pub enum EvalError {
    /// The expression could not be scanned or converted to postfix.
    Parse(ParseError),
    /// The postfix sequence could not be reduced or rendered.
    Runtime(RuntimeError),
}

impl From<ParseError> for EvalError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
