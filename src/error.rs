/// Parsing errors.
///
/// Defines all error types that can occur while scanning an expression and
/// converting it to postfix order: unknown symbols, unbalanced brackets and,
/// in strict mode, non-canonical numerals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing a postfix
/// sequence and rendering its value: malformed operator/operand layouts,
/// division by zero, integer overflow and numerals out of range.
pub mod runtime_error;
/// Top-level error returned by expression evaluation.
///
/// Wraps either a parse or a runtime failure so callers handle one type.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
