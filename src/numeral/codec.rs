use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    numeral::tables::{BOUND, WEIGHTS, ZERO_SYMBOL, face_value, subtractive_value},
};

/// Reads a numeral run into its integer value.
///
/// The zero sentinel `Z` on its own reads as `0`. Otherwise symbols are
/// scanned left to right. When a symbol is worth more than the one before it,
/// the pair's net subtractive value replaces the face value already counted
/// for the previous symbol. Everything else adds its face value.
///
/// The reading is permissive: runs that are not canonical (such as `IIX` or
/// `VX`) still produce a value, and pairs outside the six legal subtractive
/// pairs contribute nothing for the higher symbol. Use [`is_canonical`] to
/// reject such runs.
///
/// # Example
/// ```
/// use romana::numeral::codec::to_int64;
///
/// assert_eq!(to_int64("Z"), 0);
/// assert_eq!(to_int64("XIV"), 14);
/// assert_eq!(to_int64("MCMXCIV"), 1994);
/// ```
#[must_use]
pub fn to_int64(text: &str) -> i64 {
    if text.len() == 1 && text.starts_with(ZERO_SYMBOL) {
        return 0;
    }

    let mut result: i64 = 0;
    let mut previous: Option<char> = None;

    for symbol in text.chars() {
        let current = face_value(symbol).unwrap_or(0);
        match previous {
            Some(prev) if face_value(prev).unwrap_or(0) < current => {
                let counted = face_value(prev).unwrap_or(0);
                result += subtractive_value(prev, symbol).map_or(0, |pair| pair - counted);
            },
            _ => result += current,
        }
        previous = Some(symbol);
    }

    result
}

/// Renders an integer as a canonical Roman numeral.
///
/// Zero renders as `Z`. Negative values get a leading `-` followed by the
/// numeral of their magnitude. Encoding is greedy over the weight table, which
/// yields the minimal-length form.
///
/// # Errors
/// Returns `RuntimeError::RomanOverflow` when `|value| > 3999`.
///
/// # Example
/// ```
/// use romana::{error::RuntimeError, numeral::codec::to_roman};
///
/// assert_eq!(to_roman(0).unwrap(), "Z");
/// assert_eq!(to_roman(-44).unwrap(), "-XLIV");
/// assert_eq!(to_roman(3999).unwrap(), "MMMCMXCIX");
///
/// let err = to_roman(4000).unwrap_err();
/// assert!(matches!(err, RuntimeError::RomanOverflow { value: 4000 }));
/// ```
pub fn to_roman(value: i64) -> EvalResult<String> {
    if value == 0 {
        return Ok(ZERO_SYMBOL.to_string());
    }
    if value.unsigned_abs() > BOUND.unsigned_abs() {
        return Err(RuntimeError::RomanOverflow { value });
    }

    let mut result = String::new();
    if value < 0 {
        result.push('-');
    }

    let mut remaining = value.abs();
    for (magnitude, literal) in WEIGHTS {
        if magnitude == 0 {
            break;
        }
        while remaining >= magnitude {
            remaining -= magnitude;
            result.push_str(literal);
        }
    }

    Ok(result)
}

/// Whether a numeral run is written in canonical form.
///
/// A run is canonical when rendering its value gives back the same text. This
/// rejects out-of-order symbols, illegal subtractive pairs, over-long
/// repetitions and any mixing of the zero sentinel with other symbols.
///
/// # Example
/// ```
/// use romana::numeral::codec::is_canonical;
///
/// assert!(is_canonical("XLII"));
/// assert!(is_canonical("Z"));
/// assert!(!is_canonical("IIX"));
/// assert!(!is_canonical("VX"));
/// assert!(!is_canonical("XZ"));
/// ```
#[must_use]
pub fn is_canonical(text: &str) -> bool {
    to_roman(to_int64(text)).is_ok_and(|rendered| rendered == text)
}
