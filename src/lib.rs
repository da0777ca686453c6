//! # postfix_calc
//!
//! postfix_calc reads one or more `;`-separated arithmetic expressions,
//! compiles them into a flat postfix program, and replays that program twice:
//! once to show how every expression was understood, fully parenthesized, and
//! once to compute its value.
//!
//! ```
//! use postfix_calc::Evaluator;
//!
//! let evaluation = Evaluator::new().evaluate("2^-3^2; cos 0 * 4").unwrap();
//!
//! assert_eq!(evaluation.understanding(), ["(2^(-(3^2)))", "((cos(0))*4)"]);
//! assert_eq!(evaluation.values(), [0.001953125, 4.0]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::environment::Environment,
    program::Program,
};

/// Provides the error types of every phase.
///
/// Syntax faults, replay inconsistencies and rejected environment entries
/// each have their own enum; [`error::Error`] wraps the first two for the
/// [`Evaluator`] facade.
///
/// # Responsibilities
/// - Defines one error enum per failure family.
/// - Attaches byte offsets to syntax faults and renders caret excerpts.
/// - Implements `Display` and `std::error::Error` for all of them.
pub mod error;
/// Scanning, parsing and the two interpreters.
///
/// # Responsibilities
/// - Holds the environment identifiers are resolved against.
/// - Scans and parses source text straight into a [`Program`].
/// - Replays programs into text and into numbers.
pub mod interpreter;
/// The postfix program model.
///
/// Declares [`program::Instruction`], the functions and operators it refers
/// to, and [`Program`], the owned instruction sequence that the parser
/// produces and the interpreters consume.
pub mod program;

pub use interpreter::parser::parse;

/// The outcome of evaluating one input.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    program:       Program,
    understanding: Vec<String>,
    values:        Vec<f64>,
}

impl Evaluation {
    /// The compiled program.
    #[must_use]
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// The fully parenthesized rendering of each expression.
    #[must_use]
    pub fn understanding(&self) -> &[String] {
        &self.understanding
    }

    /// The value of each expression.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Pairs each rendering with its value, in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.understanding
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Parses and evaluates source text against one environment.
///
/// The environment is fixed when the evaluator is created and shared by
/// every input it evaluates.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    environment: Environment,
}

impl Evaluator {
    /// Creates an evaluator knowing `e` and `pi`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_environment(Environment::new())
    }

    #[must_use]
    pub const fn with_environment(environment: Environment) -> Self {
        Self { environment }
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Parses `source` without evaluating it.
    ///
    /// # Errors
    /// Returns the first syntax fault in `source`.
    pub fn parse(&self, source: &str) -> Result<Program, error::ParseError> {
        parse(source, &self.environment)
    }

    /// Parses `source`, then renders and evaluates every expression.
    ///
    /// Nothing is rendered or evaluated if any expression fails to parse.
    ///
    /// # Errors
    /// Returns [`Error::Parse`] for a syntax fault. [`Error::Replay`] would
    /// mean the parser produced an inconsistent program.
    ///
    /// # Example
    /// ```
    /// use postfix_calc::{Evaluator, error::{Error, ParseError}};
    ///
    /// let evaluator = Evaluator::new();
    ///
    /// let result = evaluator.evaluate("foo; 3 + 4;");
    /// assert!(matches!(result,
    ///                  Err(Error::Parse(ParseError::UnknownIdentifier { offset: 0, .. }))));
    /// ```
    pub fn evaluate(&self, source: &str) -> Result<Evaluation, Error> {
        let program = self.parse(source)?;
        let understanding = program.render()?;
        let values = program.evaluate()?;

        Ok(Evaluation { program,
                        understanding,
                        values })
    }
}
