use crate::program::Instruction;

#[derive(Debug, Clone, PartialEq)]
/// Represents a postfix program that cannot be replayed.
pub enum ReplayError {
    /// An instruction needed more operands than the stack held.
    StackUnderflow {
        /// Position of the instruction in the program.
        index:       usize,
        /// The instruction itself.
        instruction: Instruction,
    },
    /// Operands were left on the stack after the last instruction.
    UnbalancedStack {
        /// Number of values left over.
        remaining: usize,
    },
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow { index, instruction } => write!(f,
                                                                  "Internal error: instruction #{index} ({instruction}) popped an empty stack."),
            Self::UnbalancedStack { remaining } => write!(f,
                                                          "Internal error: {remaining} value(s) left on the stack after the last expression."),
        }
    }
}

impl std::error::Error for ReplayError {}
