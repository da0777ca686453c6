use crate::{
    interpreter::{
        evaluator::{binary::apply_binary, function::apply_function},
        replay::StackMachine,
    },
    program::{BinaryOperator, MathFunction},
};

/// Evaluates a program with plain IEEE 754 double arithmetic.
///
/// Nothing is special-cased: division by zero, `log` of a non-positive
/// number or an overflowing power produce infinities and NaNs exactly as
/// the platform's floating-point routines do.
///
/// # Example
/// ```
/// use postfix_calc::{interpreter::environment::Environment, parse};
///
/// let values = parse("1/0; log 0; log -1", &Environment::new()).unwrap()
///                                                             .evaluate()
///                                                             .unwrap();
///
/// assert_eq!(values[0], f64::INFINITY);
/// assert_eq!(values[1], f64::NEG_INFINITY);
/// assert!(values[2].is_nan());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic;

impl StackMachine for Arithmetic {
    type Operand = f64;
    type Output = f64;

    fn constant(&mut self, value: f64) -> f64 {
        value
    }

    fn function(&mut self, function: MathFunction, operand: f64) -> f64 {
        apply_function(function, operand)
    }

    fn negate(&mut self, operand: f64) -> f64 {
        -operand
    }

    fn binary(&mut self, op: BinaryOperator, left: f64, right: f64) -> f64 {
        apply_binary(op, left, right)
    }

    fn finish(&mut self, operand: f64) -> f64 {
        operand
    }
}
