/// Core evaluation logic.
///
/// Reduces a postfix sequence on a result stack and checks that exactly one
/// value is left.
pub mod core;

/// Binary operator application.
///
/// Implements the arithmetic behind each operator, including floor division.
pub mod binary;
