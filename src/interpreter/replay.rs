use crate::{
    error::ReplayError,
    program::{BinaryOperator, Instruction, MathFunction},
};

/// What one interpreter produces for each kind of instruction.
///
/// Implementors only describe how values are built; [`replay`] owns the
/// stack, the operand order and the consistency checks.
pub trait StackMachine {
    /// The value kept on the stack.
    type Operand;
    /// The value reported for each finished expression.
    type Output;

    fn constant(&mut self, value: f64) -> Self::Operand;

    fn function(&mut self, function: MathFunction, operand: Self::Operand) -> Self::Operand;

    fn negate(&mut self, operand: Self::Operand) -> Self::Operand;

    fn binary(&mut self,
              op: BinaryOperator,
              left: Self::Operand,
              right: Self::Operand)
              -> Self::Operand;

    fn finish(&mut self, operand: Self::Operand) -> Self::Output;
}

/// Replays `instructions` against an empty stack.
///
/// Returns one value per `EndExpression`, in order.
///
/// # Errors
/// - `StackUnderflow` if an instruction finds fewer operands than it needs.
/// - `UnbalancedStack` if values remain after the last instruction.
pub fn replay<M: StackMachine>(instructions: &[Instruction],
                               machine: &mut M)
                               -> Result<Vec<M::Output>, ReplayError> {
    let mut stack = Vec::new();
    let mut results = Vec::new();

    for (index, &instruction) in instructions.iter().enumerate() {
        let underflow = || {
            let error = ReplayError::StackUnderflow { index, instruction };
            log::error!("{error}");
            error
        };

        match instruction {
            Instruction::PushConstant(value) => stack.push(machine.constant(value)),
            Instruction::ApplyFunction(function) => {
                let operand = stack.pop().ok_or_else(underflow)?;
                stack.push(machine.function(function, operand));
            },
            Instruction::UnaryNegate => {
                let operand = stack.pop().ok_or_else(underflow)?;
                stack.push(machine.negate(operand));
            },
            Instruction::BinaryOp(op) => {
                let right = stack.pop().ok_or_else(underflow)?;
                let left = stack.pop().ok_or_else(underflow)?;
                stack.push(machine.binary(op, left, right));
            },
            Instruction::EndExpression => {
                let operand = stack.pop().ok_or_else(underflow)?;
                results.push(machine.finish(operand));
            },
        }
    }

    if !stack.is_empty() {
        let error = ReplayError::UnbalancedStack { remaining: stack.len() };
        log::error!("{error}");
        return Err(error);
    }

    Ok(results)
}
