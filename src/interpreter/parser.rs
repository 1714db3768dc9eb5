/// Core parser entry point.
///
/// Runs the shunting-yard scan over the token stream, moving operands to the
/// output and holding operators and brackets on a work stack until their
/// precedence allows them to follow.
pub mod core;

/// Unary minus detection.
///
/// Decides whether a `-` is a sign for the following numeral
/// instead of acting as a binary subtraction.
pub mod unary;

/// Parsing utilities.
///
/// Shared helpers for reading numeral runs and moving elements between the
/// work stack and the output.
pub mod utils;
