use crate::program::BinaryOperator;

/// Combines two operands.
///
/// `^` is `f64::powf`, so negative bases with fractional exponents give NaN
/// and `0^0` is `1`.
///
/// # Example
/// ```
/// use postfix_calc::{interpreter::evaluator::binary::apply_binary, program::BinaryOperator};
///
/// assert_eq!(apply_binary(BinaryOperator::Sub, 8.0, 3.0), 5.0);
/// assert_eq!(apply_binary(BinaryOperator::Pow, 2.0, -9.0), 0.001953125);
/// assert!(apply_binary(BinaryOperator::Pow, -8.0, 1.0 / 3.0).is_nan());
/// ```
#[must_use]
pub fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Pow => left.powf(right),
    }
}
