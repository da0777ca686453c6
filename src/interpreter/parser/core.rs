use crate::{
    error::ParseError,
    interpreter::{environment::Environment, scanner::Scanner},
    program::{Instruction, MathFunction, Program},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply operands may nest before the input is rejected.
///
/// Every nested operand (a group, a function argument, a negated operand or
/// the right side of `^`) costs one level.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive-descent parser that emits postfix instructions as it goes.
///
/// Each grammar rule consumes its operands through the rules below it and
/// then appends its own instruction, so the program is built in postorder
/// without any intermediate tree.
pub struct Parser<'src, 'env> {
    pub(super) scanner:     Scanner<'src>,
    pub(super) environment: &'env Environment,
    pub(super) program:     Program,
    pub(super) depth:       usize,
}

impl<'src, 'env> Parser<'src, 'env> {
    #[must_use]
    pub const fn new(source: &'src str, environment: &'env Environment) -> Self {
        Self { scanner: Scanner::new(source),
               environment,
               program: Program::from_instructions(Vec::new()),
               depth: 0 }
    }

    /// Parses the whole input.
    ///
    /// Grammar: `input := (sum (";" | end))*`
    ///
    /// Every expression is closed with an `EndExpression`. The first fault
    /// aborts the entire input, including expressions that were already
    /// complete.
    pub fn parse_program(mut self) -> ParseResult<Program> {
        self.scanner.skip_whitespace();

        while self.scanner.current().is_some() {
            if let Err(e) = self.parse_expression_statement() {
                log::debug!("parse aborted after {} complete expression(s): {e}",
                            self.program.expression_count());
                return Err(e);
            }
        }

        log::debug!("parsed {} expression(s) into {} instruction(s)",
                    self.program.expression_count(),
                    self.program.len());
        Ok(self.program)
    }

    fn parse_expression_statement(&mut self) -> ParseResult<()> {
        self.parse_sum()?;

        match self.scanner.current() {
            Some(';') => {
                self.program.push(Instruction::EndExpression);
                self.scanner.advance_after_token();
                Ok(())
            },
            None => {
                self.program.push(Instruction::EndExpression);
                Ok(())
            },
            Some(found) => Err(self.separator_error(found)),
        }
    }

    /// Explains why `found` cannot follow a complete expression.
    fn separator_error(&self, found: char) -> ParseError {
        self.unknown_name_error()
            .unwrap_or(ParseError::MissingSeparator { found,
                                                      offset: self.scanner.offset() })
    }

    /// Reports the name under the cursor if it is not known at all.
    ///
    /// A numeral may run straight into a name (`12abc`); when that name is
    /// not known, reporting it is more useful than asking for a `;` or `)`.
    pub(super) fn unknown_name_error(&self) -> Option<ParseError> {
        let offset = self.scanner.offset();
        let mut lookahead = self.scanner.clone();

        lookahead.read_name()
                 .filter(|name| {
                     MathFunction::from_name(name).is_none() && !self.environment.contains(name)
                 })
                 .map(|name| ParseError::UnknownIdentifier { name: name.to_string(),
                                                             offset })
    }

    /// The fault for an operand that was required at the cursor.
    pub(super) fn unexpected(&self) -> ParseError {
        let offset = self.scanner.offset();
        match self.scanner.current() {
            Some(found) => ParseError::UnexpectedCharacter { found, offset },
            None => ParseError::UnexpectedEndOfInput { offset },
        }
    }
}

/// Parses `source` into a postfix program.
///
/// Identifiers are resolved against `environment` while parsing, so the
/// returned program only holds numbers.
///
/// # Errors
/// Returns the first [`ParseError`] found; no partial program is returned.
///
/// # Example
/// ```
/// use postfix_calc::{
///     interpreter::environment::Environment,
///     parse,
///     program::{BinaryOperator, Instruction},
/// };
///
/// let program = parse("2 + 2;", &Environment::new()).unwrap();
/// assert_eq!(program.instructions(),
///            [Instruction::PushConstant(2.0),
///             Instruction::PushConstant(2.0),
///             Instruction::BinaryOp(BinaryOperator::Add),
///             Instruction::EndExpression]);
///
/// assert!(parse("foo; 3 + 4;", &Environment::new()).is_err());
/// ```
pub fn parse(source: &str, environment: &Environment) -> ParseResult<Program> {
    Parser::new(source, environment).parse_program()
}
