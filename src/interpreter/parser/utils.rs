use crate::interpreter::{
    element::{Bracket, Element, Operator},
    lexer::{Lexeme, Token},
};

/// Reads the maximal numeral run at the start of `tokens`.
///
/// Whitespace is not significant, so numeral tokens that were only separated
/// by whitespace are joined into one run.
///
/// # Returns
/// The joined run and the number of tokens it spans.
pub(in crate::interpreter::parser) fn read_numeral(tokens: &[Lexeme]) -> (String, usize) {
    let mut numeral = String::new();
    let mut consumed = 0;

    for (token, _) in tokens {
        match token {
            Some(Token::Numeral(run)) => {
                numeral.push_str(run);
                consumed += 1;
            },
            _ => break,
        }
    }

    (numeral, consumed)
}

/// Pushes a binary operator onto the work stack.
///
/// Every stacked element with a priority at least as high as the new
/// operator's is moved to the output first, which makes operators of equal
/// precedence left-associative. Brackets sit below every operator and stay.
pub(in crate::interpreter::parser) fn push_operator(stack: &mut Vec<Element>,
                                                    out: &mut Vec<Element>,
                                                    op: Operator) {
    while stack.last().is_some_and(|top| top.priority() >= op.priority()) {
        if let Some(top) = stack.pop() {
            out.push(top);
        }
    }
    stack.push(Element::Operator(op));
}

/// Moves operators to the output until the matching opening bracket.
///
/// The opening bracket is discarded.
///
/// # Returns
/// `false` if the stack ran out before an opening bracket was found.
pub(in crate::interpreter::parser) fn close_bracket(stack: &mut Vec<Element>,
                                                    out: &mut Vec<Element>)
                                                    -> bool {
    while let Some(top) = stack.pop() {
        if let Element::Bracket(Bracket::Open { .. }) = top {
            return true;
        }
        out.push(top);
    }
    false
}
