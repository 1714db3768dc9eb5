/// Checked integer helpers.
///
/// This module provides the arithmetic primitives used by operator
/// application, most notably floor division. Every helper returns a
/// `Result`, reporting division by zero or 64-bit overflow instead of
/// panicking.
pub mod num;
