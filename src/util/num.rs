use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Integer division rounding toward negative infinity.
///
/// When both operands share a sign (or the dividend is zero) the quotient is
/// the ordinary truncating one. Otherwise the magnitude is rounded up before
/// negating, so `-10 / 3` gives `-4` and `10 / -3` gives `-4`.
///
/// ## Errors
/// - `RuntimeError::DivisionByZero` if `right` is zero.
/// - `RuntimeError::Overflow` for `i64::MIN / -1`.
///
/// ## Example
/// ```
/// use romana::{error::RuntimeError, util::num::floor_div};
///
/// assert_eq!(floor_div(10, 3).unwrap(), 3);
/// assert_eq!(floor_div(-10, 3).unwrap(), -4);
/// assert_eq!(floor_div(10, -3).unwrap(), -4);
/// assert_eq!(floor_div(-9, -3).unwrap(), 3);
/// assert_eq!(floor_div(0, -7).unwrap(), 0);
///
/// assert!(matches!(floor_div(1, 0), Err(RuntimeError::DivisionByZero)));
/// assert!(matches!(floor_div(i64::MIN, -1), Err(RuntimeError::Overflow)));
/// ```
pub fn floor_div(left: i64, right: i64) -> EvalResult<i64> {
    if right == 0 {
        return Err(RuntimeError::DivisionByZero);
    }

    if (left <= 0 && right < 0) || (left >= 0 && right > 0) {
        return left.checked_div(right).ok_or(RuntimeError::Overflow);
    }

    let dividend = left.unsigned_abs();
    let divisor = right.unsigned_abs();
    let magnitude = dividend.checked_add(divisor - 1).ok_or(RuntimeError::Overflow)? / divisor;

    0_i64.checked_sub_unsigned(magnitude).ok_or(RuntimeError::Overflow)
}

/// Adds two integers, reporting overflow as a runtime error.
///
/// ## Example
/// ```
/// use romana::util::num::add_checked;
///
/// assert_eq!(add_checked(2, 3).unwrap(), 5);
/// assert!(add_checked(i64::MAX, 1).is_err());
/// ```
pub fn add_checked(left: i64, right: i64) -> EvalResult<i64> {
    left.checked_add(right).ok_or(RuntimeError::Overflow)
}

/// Subtracts two integers, reporting overflow as a runtime error.
pub fn sub_checked(left: i64, right: i64) -> EvalResult<i64> {
    left.checked_sub(right).ok_or(RuntimeError::Overflow)
}

/// Multiplies two integers, reporting overflow as a runtime error.
///
/// ## Example
/// ```
/// use romana::util::num::mul_checked;
///
/// assert_eq!(mul_checked(-4, 5).unwrap(), -20);
/// assert!(mul_checked(i64::MAX, 2).is_err());
/// ```
pub fn mul_checked(left: i64, right: i64) -> EvalResult<i64> {
    left.checked_mul(right).ok_or(RuntimeError::Overflow)
}
