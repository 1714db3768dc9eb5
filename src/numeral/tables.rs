/// Largest magnitude that can be rendered as a numeral.
pub const BOUND: i64 = 3999;

/// Sentinel symbol standing for zero. Never combined with other symbols.
pub const ZERO_SYMBOL: char = 'Z';

/// Net value of each legal subtractive pair `(lower, higher)`.
pub const SUBTRACTIVE_PAIRS: [((char, char), i64); 6] = [(('I', 'V'), 4),
                                                         (('I', 'X'), 9),
                                                         (('X', 'L'), 40),
                                                         (('X', 'C'), 90),
                                                         (('C', 'D'), 400),
                                                         (('C', 'M'), 900)];

/// Greedy encoding table, strictly descending, terminated by the zero entry.
pub const WEIGHTS: [(i64, &str); 14] = [(1000, "M"),
                                        (900, "CM"),
                                        (500, "D"),
                                        (400, "CD"),
                                        (100, "C"),
                                        (90, "XC"),
                                        (50, "L"),
                                        (40, "XL"),
                                        (10, "X"),
                                        (9, "IX"),
                                        (5, "V"),
                                        (4, "IV"),
                                        (1, "I"),
                                        (0, "Z")];

/// Returns the additive face value of a numeral symbol.
///
/// Only the seven classical symbols have a face value; the zero sentinel and
/// any other character yield `None`.
///
/// # Example
/// ```
/// use romana::numeral::tables::face_value;
///
/// assert_eq!(face_value('X'), Some(10));
/// assert_eq!(face_value('M'), Some(1000));
/// assert_eq!(face_value('Z'), None);
/// ```
#[must_use]
pub const fn face_value(symbol: char) -> Option<i64> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Returns the net value of a subtractive pair, if the pair is legal.
///
/// # Example
/// ```
/// use romana::numeral::tables::subtractive_value;
///
/// assert_eq!(subtractive_value('I', 'X'), Some(9));
/// assert_eq!(subtractive_value('V', 'X'), None);
/// ```
#[must_use]
pub fn subtractive_value(lower: char, higher: char) -> Option<i64> {
    SUBTRACTIVE_PAIRS.iter()
                     .find(|((l, h), _)| *l == lower && *h == higher)
                     .map(|(_, value)| *value)
}

