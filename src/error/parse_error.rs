#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character outside the numeral, operator and bracket set.
    BadSymbol {
        /// 1-based character position in the input.
        position: usize,
    },
    /// A bracket has no matching partner.
    BracketMismatch {
        /// 1-based position of the unmatched bracket.
        position: usize,
    },
    /// A numeral run is not written in canonical form (strict mode only).
    InvalidNumeral {
        /// The offending numeral run.
        numeral:  String,
        /// 1-based position where the run starts.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadSymbol { position } => write!(f, "Bad symbol on position {position}"),
            Self::BracketMismatch { .. } => write!(f, "Invalid bracket sequence in expression"),
            Self::InvalidNumeral { numeral, position } => {
                write!(f, "Invalid numeral '{numeral}' on position {position}")
            },
        }
    }
}

impl std::error::Error for ParseError {}
