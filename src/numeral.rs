/// Conversion between Roman-numeral text and signed integers.
///
/// Reads numeral runs into `i64` values and renders `i64` values back into
/// their canonical, minimal-length numeral form. Rendering is bounded to
/// `|value| <= 3999`; zero is written as the sentinel `Z`.
pub mod codec;
/// Constant symbol tables shared by the codec.
///
/// Face values of single symbols, the six legal subtractive pairs, and the
/// descending weight table used for greedy encoding. All tables are immutable
/// and safe to read from any thread.
pub mod tables;
