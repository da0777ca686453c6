use crate::program::MathFunction;

/// Applies a transcendental function to a real argument.
///
/// `log` is the natural logarithm. Arguments outside a function's domain
/// yield NaN or an infinity rather than an error.
///
/// # Example
/// ```
/// use postfix_calc::{interpreter::evaluator::function::apply_function, program::MathFunction};
///
/// assert_eq!(apply_function(MathFunction::Exp, 0.0), 1.0);
/// assert_eq!(apply_function(MathFunction::Log, 1.0), 0.0);
/// assert!(apply_function(MathFunction::Log, -1.0).is_nan());
/// ```
#[must_use]
pub fn apply_function(function: MathFunction, x: f64) -> f64 {
    match function {
        MathFunction::Exp => x.exp(),
        MathFunction::Cos => x.cos(),
        MathFunction::Log => x.ln(),
        MathFunction::Sin => x.sin(),
        MathFunction::Tan => x.tan(),
    }
}
