use crate::{error::RuntimeError, interpreter::element::Element};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a postfix sequence to a single integer.
///
/// Values are pushed onto a result stack. Each operator pops its right
/// operand, then its left operand, and pushes the result of applying itself.
/// An empty sequence evaluates to `0`.
///
/// # Parameters
/// - `postfix`: Elements in postfix order, consumed by the reduction.
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// - `MalformedExpression` if an operator lacks two value operands, or if
///   anything other than exactly one value remains at the end.
/// - `DivisionByZero` and `Overflow` from operator application.
///
/// # Example
/// ```
/// use romana::interpreter::{
///     element::{Element, Operator},
///     evaluator::core::eval_postfix,
/// };
///
/// let postfix = vec![Element::Value(10),
///                    Element::Value(4),
///                    Element::Operator(Operator::Sub)];
/// assert_eq!(eval_postfix(postfix).unwrap(), 6);
/// assert_eq!(eval_postfix(Vec::new()).unwrap(), 0);
/// ```
pub fn eval_postfix(postfix: Vec<Element>) -> EvalResult<i64> {
    if postfix.is_empty() {
        return Ok(0);
    }

    let mut stack: Vec<Element> = Vec::with_capacity(postfix.len());

    for element in postfix {
        match element {
            Element::Operator(op) => {
                let right = stack.pop().ok_or(RuntimeError::MalformedExpression)?;
                let left = stack.pop().ok_or(RuntimeError::MalformedExpression)?;

                let (Element::Value(left), Element::Value(right)) = (left, right) else {
                    return Err(RuntimeError::MalformedExpression);
                };
                stack.push(Element::Value(op.apply(left, right)?));
            },
            other => stack.push(other),
        }
    }

    match stack.as_slice() {
        [Element::Value(value)] => Ok(*value),
        _ => Err(RuntimeError::MalformedExpression),
    }
}
