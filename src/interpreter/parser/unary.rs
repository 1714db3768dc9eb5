use crate::interpreter::lexer::{Lexeme, Token};

/// Checks whether the token at `index` is a unary minus.
///
/// A `-` is unary when it is immediately followed by a numeral or an opening
/// bracket, and it either starts the expression or directly follows an
/// operator or a closing bracket.
///
/// # Parameters
/// - `tokens`: The full token stream.
/// - `index`: Index of the token to inspect.
///
/// # Returns
/// `true` if the token should fold into the sign of what follows.
///
/// # Example
/// ```
/// use romana::interpreter::{lexer::tokenize, parser::unary::is_unary_minus};
///
/// let tokens = tokenize("-V*-(I)");
/// assert!(is_unary_minus(&tokens, 0));
/// assert!(!is_unary_minus(&tokens, 1));
/// assert!(is_unary_minus(&tokens, 3));
///
/// let tokens = tokenize("X-V");
/// assert!(!is_unary_minus(&tokens, 1));
/// ```
#[must_use]
pub fn is_unary_minus(tokens: &[Lexeme], index: usize) -> bool {
    if !matches!(tokens.get(index), Some((Some(Token::Minus), _))) {
        return false;
    }

    let opens_operand =
        matches!(tokens.get(index + 1), Some((Some(Token::Numeral(_) | Token::LParen), _)));

    let follows_operator = match index.checked_sub(1).and_then(|prev| tokens.get(prev)) {
        None => true,
        Some((Some(prev), _)) => prev.is_operator() || *prev == Token::RParen,
        Some((None, _)) => false,
    };

    opens_operand && follows_operator
}
