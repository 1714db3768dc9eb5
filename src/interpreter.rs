/// The element module defines the tokens of a postfix sequence.
///
/// An element is either an integer operand, a binary operator carrying its
/// precedence, or a bracket marker used while reordering operators.
///
/// # Responsibilities
/// - Defines the `Element`, `Operator` and `Bracket` types.
/// - Assigns precedence tiers to operators and brackets.
pub mod element;
/// The evaluator module reduces a postfix sequence to a single integer.
///
/// Values are pushed onto a result stack; every operator pops its right and
/// left operands and pushes the result of applying itself to them.
///
/// # Responsibilities
/// - Applies operators with checked, floor-dividing integer arithmetic.
/// - Reports malformed sequences, division by zero and overflow.
pub mod evaluator;
/// The lexer module tokenizes the raw expression text.
///
/// The lexer reads the input and produces numeral runs, operators and
/// brackets, each tagged with its 1-based character position. Whitespace is
/// skipped and unknown characters are kept as invalid entries.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source positions.
/// - Leaves reporting of unknown characters to the parser, in scan order.
pub mod lexer;
/// The parser module converts tokens into postfix order.
///
/// Implements the shunting-yard algorithm with operator precedence, bracket
/// nesting and unary-minus resolution.
///
/// # Responsibilities
/// - Produces a postfix `Element` sequence ready for evaluation.
/// - Detects unbalanced brackets and unknown symbols.
/// - Optionally rejects numerals that are not canonical.
pub mod parser;
