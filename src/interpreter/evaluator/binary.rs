use crate::{
    interpreter::{element::Operator, evaluator::core::EvalResult},
    util::num::{add_checked, floor_div, mul_checked, sub_checked},
};

impl Operator {
    /// Applies the operator to two integer operands.
    ///
    /// Addition, subtraction and multiplication are exact. Division rounds the
    /// quotient toward negative infinity. All operations are checked for
    /// 64-bit overflow.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<i64>` containing the computed value.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` when dividing by zero.
    /// - `RuntimeError::Overflow` when the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use romana::{error::RuntimeError, interpreter::element::Operator};
    ///
    /// assert_eq!(Operator::Add.apply(2, 3).unwrap(), 5);
    /// assert_eq!(Operator::Sub.apply(2, 3).unwrap(), -1);
    /// assert_eq!(Operator::Mul.apply(-4, 3).unwrap(), -12);
    /// assert_eq!(Operator::Div.apply(-10, 3).unwrap(), -4);
    /// assert_eq!(Operator::Div.apply(1, 0).unwrap_err(), RuntimeError::DivisionByZero);
    /// ```
    pub fn apply(self, left: i64, right: i64) -> EvalResult<i64> {
        match self {
            Self::Add => add_checked(left, right),
            Self::Sub => sub_checked(left, right),
            Self::Mul => mul_checked(left, right),
            Self::Div => floor_div(left, right),
        }
    }
}
