//! # romana
//!
//! romana evaluates integer arithmetic written in Roman numerals.
//! It parses expressions such as `-X/III + (II*IV)`, evaluates them with
//! floor-dividing integer arithmetic, and renders the result back as a
//! numeral. Zero is written `Z`; negative values carry a leading `-`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::EvalError,
    interpreter::{element::format_postfix, evaluator::core::eval_postfix, parser::core::to_postfix},
    numeral::codec::to_roman,
};

/// Line-by-line evaluation loop used by the `romana` binary.
///
/// Reads expressions one per line and writes one result line each, reporting
/// failures inline and moving on to the next line.
pub mod driver;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning,
/// reordering or reducing an expression. Every failure is terminal for the
/// expression being evaluated and nothing else.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches source positions to parse errors.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Orchestrates the conversion from text to value.
///
/// This module ties together lexing, postfix conversion and postfix
/// reduction.
///
/// # Responsibilities
/// - Tokenizes raw input with source positions.
/// - Converts infix tokens to postfix order.
/// - Reduces the postfix sequence to an integer.
pub mod interpreter;
/// Roman numeral reading and rendering.
///
/// # Responsibilities
/// - Holds the constant symbol tables.
/// - Converts numeral runs to `i64` and back.
/// - Checks whether a run is written canonically.
pub mod numeral;
/// Evaluation options.
pub mod options;
/// Checked integer helpers shared by operator application.
pub mod util;

pub use options::Options;

/// Evaluates an expression and renders the result as a Roman numeral.
///
/// Numerals are read permissively. See [`evaluate_with`] to enable strict
/// numeral checking.
///
/// # Errors
/// Returns an error if the expression contains an unknown symbol, has
/// unbalanced brackets, is not a well-formed expression, divides by zero, or
/// produces a value outside `-3999..=3999`.
///
/// # Examples
/// ```
/// use romana::evaluate;
///
/// assert_eq!(evaluate("II+III*II").unwrap(), "VIII");
/// assert_eq!(evaluate("-X/III").unwrap(), "-IV");
/// assert_eq!(evaluate("").unwrap(), "Z");
///
/// // Division by zero is reported, not panicked on.
/// assert!(evaluate("X/Z").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<String, EvalError> {
    evaluate_with(expression, &Options::default())
}

/// Evaluates an expression with explicit options.
///
/// # Errors
/// Same as [`evaluate`], plus `InvalidNumeral` for non-canonical numerals when
/// `options.strict_numerals` is set.
///
/// # Examples
/// ```
/// use romana::{Options, evaluate_with};
///
/// assert_eq!(evaluate_with("IIX", &Options::default()).unwrap(), "X");
/// assert!(evaluate_with("IIX", &Options::strict()).is_err());
/// ```
pub fn evaluate_with(expression: &str, options: &Options) -> Result<String, EvalError> {
    let postfix = to_postfix(expression, options)?;
    debug!(expression, postfix = %format_postfix(&postfix), "parsed expression");

    let value = eval_postfix(postfix)?;
    let numeral = to_roman(value)?;
    debug!(value, %numeral, "evaluated expression");

    Ok(numeral)
}
