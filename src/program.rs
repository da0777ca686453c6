use std::fmt;

use crate::{
    error::ReplayError,
    interpreter::{evaluator::Arithmetic, renderer::Renderer, replay::replay},
};

/// The five transcendental functions that may prefix an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathFunction {
    /// `exp`
    Exp,
    /// `cos`
    Cos,
    /// `log`, the natural logarithm.
    Log,
    /// `sin`
    Sin,
    /// `tan`
    Tan,
}

impl MathFunction {
    /// Every function, in the order they are looked up.
    pub const ALL: [Self; 5] = [Self::Exp, Self::Cos, Self::Log, Self::Sin, Self::Tan];

    /// Resolves a function by its exact, case-sensitive source name.
    ///
    /// # Example
    /// ```
    /// use postfix_calc::program::MathFunction;
    ///
    /// assert_eq!(MathFunction::from_name("log"), Some(MathFunction::Log));
    /// assert_eq!(MathFunction::from_name("Log"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// The name used in source text and in rendered output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exp => "exp",
            Self::Cos => "cos",
            Self::Log => "log",
            Self::Sin => "sin",
            Self::Tan => "tan",
        }
    }
}

/// The binary operators, each a single character in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Maps a source character to its operator.
    ///
    /// # Example
    /// ```
    /// use postfix_calc::program::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('^'), Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The character written between the operands.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

/// One postfix instruction.
///
/// Operands are always pushed before the instruction that consumes them, so a
/// program is replayed left to right against a single stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    /// Pushes a literal or a resolved environment value.
    PushConstant(f64),
    /// Pops one operand and pushes its image under the function.
    ApplyFunction(MathFunction),
    /// Pops the right operand, then the left one, and pushes the result.
    BinaryOp(BinaryOperator),
    /// Pops one operand and pushes its negation.
    UnaryNegate,
    /// Pops the finished value of one `;`-terminated expression.
    EndExpression,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PushConstant(value) => write!(f, "push {value}"),
            Self::ApplyFunction(function) => write!(f, "call {}", function.name()),
            Self::BinaryOp(op) => write!(f, "binop {}", op.symbol()),
            Self::UnaryNegate => write!(f, "neg"),
            Self::EndExpression => write!(f, "end"),
        }
    }
}

/// A flat postfix program covering every expression of one input.
///
/// Programs come out of [`crate::interpreter::parser::parse`] and are
/// consumed by [`Program::render`] and [`Program::evaluate`], each of which
/// replays the whole sequence once.
///
/// # Example
/// ```
/// use postfix_calc::{interpreter::environment::Environment, parse};
///
/// let program = parse("8 - 3 - 2; 2 ^ -3 ^ 2", &Environment::new()).unwrap();
///
/// assert_eq!(program.expression_count(), 2);
/// assert_eq!(program.render().unwrap(), ["((8-3)-2)", "(2^(-(3^2)))"]);
/// assert_eq!(program.evaluate().unwrap(), [3.0, 0.001953125]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Wraps a hand-assembled instruction sequence.
    ///
    /// The sequence is not checked here; a malformed one is reported as a
    /// [`ReplayError`] when it is rendered or evaluated.
    #[must_use]
    pub const fn from_instructions(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    pub(crate) fn push(&mut self, instruction: Instruction) {
        log::trace!("emit #{} {instruction}", self.instructions.len());
        self.instructions.push(instruction);
    }

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Number of `;`-terminated expressions, i.e. of `EndExpression` markers.
    #[must_use]
    pub fn expression_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, Instruction::EndExpression))
            .count()
    }

    /// Renders every expression fully parenthesized, one string each.
    ///
    /// # Errors
    /// Returns a [`ReplayError`] if the sequence is not a valid postfix
    /// program. Programs produced by the parser never fail.
    pub fn render(&self) -> Result<Vec<String>, ReplayError> {
        replay(&self.instructions, &mut Renderer)
    }

    /// Renders every expression, each followed by `";\n"`.
    ///
    /// # Errors
    /// Same as [`Program::render`].
    ///
    /// # Example
    /// ```
    /// use postfix_calc::{interpreter::environment::Environment, parse};
    ///
    /// let program = parse("cos 2^3*4; 1+2", &Environment::new()).unwrap();
    /// assert_eq!(program.understanding().unwrap(), "((cos(2^3))*4);\n(1+2);\n");
    /// ```
    pub fn understanding(&self) -> Result<String, ReplayError> {
        Ok(self.render()?
               .into_iter()
               .map(|expression| expression + ";\n")
               .collect())
    }

    /// Computes the value of every expression, in source order.
    ///
    /// # Errors
    /// Returns a [`ReplayError`] if the sequence is not a valid postfix
    /// program. Programs produced by the parser never fail.
    pub fn evaluate(&self) -> Result<Vec<f64>, ReplayError> {
        replay(&self.instructions, &mut Arithmetic)
    }
}

/// Disassembly, one indexed instruction per line.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "{index:04} {instruction}")?;
        }
        Ok(())
    }
}
