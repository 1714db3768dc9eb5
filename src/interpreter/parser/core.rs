use tracing::trace;

use crate::{
    Options,
    error::ParseError,
    interpreter::{
        element::{Bracket, Element, Operator},
        lexer::{Token, tokenize},
        parser::{
            unary::is_unary_minus,
            utils::{close_bracket, push_operator, read_numeral},
        },
    },
    numeral::codec::{is_canonical, to_int64},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Converts an infix expression into a postfix element sequence.
///
/// This is the entry point for parsing. Numeral runs become `Value`
/// elements, operators are reordered by precedence on a work stack, and
/// brackets are resolved as they close. A unary minus does not produce an
/// element of its own: it flips the sign of the numeral that immediately
/// follows it. Any other token in between (an opening bracket included)
/// resets the sign, so `-(II)` reads as `II`.
///
/// An empty (or all-whitespace) expression yields an empty sequence.
///
/// # Parameters
/// - `source`: The raw expression text.
/// - `options`: Parsing options; `strict_numerals` rejects non-canonical
///   numeral runs.
///
/// # Returns
/// The postfix sequence.
///
/// # Errors
/// - `BadSymbol` for a character outside the numeral, operator and bracket
///   set.
/// - `BracketMismatch` for a `)` without a matching `(`, or a `(` left open.
/// - `InvalidNumeral` for a non-canonical numeral in strict mode.
///
/// # Example
/// ```
/// use romana::{
///     Options,
///     interpreter::{
///         element::{Element, Operator},
///         parser::core::to_postfix,
///     },
/// };
///
/// let postfix = to_postfix("II+III*II", &Options::default()).unwrap();
/// assert_eq!(postfix,
///            vec![Element::Value(2),
///                 Element::Value(3),
///                 Element::Value(2),
///                 Element::Operator(Operator::Mul),
///                 Element::Operator(Operator::Add)]);
/// ```
pub fn to_postfix(source: &str, options: &Options) -> ParseResult<Vec<Element>> {
    let tokens = tokenize(source);
    let mut out = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Element> = Vec::new();
    let mut unarity: i64 = 1;
    let mut index = 0;

    while index < tokens.len() {
        let (token, position) = &tokens[index];
        let position = *position;

        match token {
            Some(Token::Numeral(_)) => {
                let (numeral, consumed) = read_numeral(&tokens[index..]);
                if options.strict_numerals && !is_canonical(&numeral) {
                    return Err(ParseError::InvalidNumeral { numeral, position });
                }
                out.push(Element::Value(to_int64(&numeral) * unarity));
                unarity = 1;
                index += consumed;
                continue;
            },
            Some(Token::LParen) => {
                stack.push(Element::Bracket(Bracket::Open { position }));
            },
            Some(Token::RParen) => {
                if !close_bracket(&mut stack, &mut out) {
                    return Err(ParseError::BracketMismatch { position });
                }
            },
            Some(other) => {
                let Some(op) = Operator::from_token(other) else {
                    return Err(ParseError::BadSymbol { position });
                };
                if is_unary_minus(&tokens, index) {
                    unarity = -1;
                    index += 1;
                    continue;
                }
                push_operator(&mut stack, &mut out, op);
            },
            None => return Err(ParseError::BadSymbol { position }),
        }

        unarity = 1;
        index += 1;
    }

    while let Some(top) = stack.pop() {
        match top {
            Element::Bracket(Bracket::Open { position }) => {
                return Err(ParseError::BracketMismatch { position });
            },
            other => out.push(other),
        }
    }

    trace!(elements = out.len(), "converted expression to postfix");
    Ok(out)
}
