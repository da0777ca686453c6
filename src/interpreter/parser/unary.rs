use crate::{
    error::ParseError,
    interpreter::{
        parser::core::{MAX_NESTING_DEPTH, ParseResult, Parser},
        scanner::is_name_start,
    },
    program::{Instruction, MathFunction},
};

impl Parser<'_, '_> {
    /// Parses prefix negation.
    ///
    /// Negation is right-recursive, so `--x` negates twice. Without a leading
    /// minus this level is just a power.
    ///
    /// Grammar: `negation := "-" negation | power`
    ///
    /// # Errors
    /// `NestingTooDeep` once more than [`MAX_NESTING_DEPTH`] operands are
    /// open at the same time.
    pub(crate) fn parse_negation(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { offset: self.scanner.offset() });
        }

        self.depth += 1;
        let result = self.parse_nested_negation();
        self.depth -= 1;
        result
    }

    fn parse_nested_negation(&mut self) -> ParseResult<()> {
        if self.scanner.current() == Some('-') {
            self.scanner.advance_after_token();
            self.parse_negation()?;
            self.program.push(Instruction::UnaryNegate);
            return Ok(());
        }

        self.parse_power()
    }

    /// Parses an operand.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | "(" sum ")"
    ///              | FUNCTION negation
    ///              | IDENTIFIER
    /// ```
    ///
    /// # Errors
    /// - `UnexpectedCharacter` if nothing here can start an operand.
    /// - `UnexpectedEndOfInput` if the input ended instead.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<()> {
        match self.scanner.current() {
            Some(c) if c.is_ascii_digit() => self.parse_number(),
            Some('(') => self.parse_grouping(),
            Some(c) if is_name_start(c) => self.parse_name(),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_number(&mut self) -> ParseResult<()> {
        let value = self.scanner.read_number().ok_or_else(|| self.unexpected())?;
        self.program.push(Instruction::PushConstant(value));
        Ok(())
    }

    /// Parses `"(" sum ")"`. The group itself emits nothing.
    fn parse_grouping(&mut self) -> ParseResult<()> {
        self.scanner.advance_after_token();
        self.parse_sum()?;

        if self.scanner.current() != Some(')') {
            return Err(self.unknown_name_error()
                           .unwrap_or(ParseError::UnterminatedParenthesis { offset: self.scanner.offset() }));
        }
        self.scanner.advance_after_token();
        Ok(())
    }

    /// Parses a function application or an environment lookup.
    ///
    /// A function takes its operand from the negation level, so it binds
    /// tighter than `*` but swallows a following power:
    /// `cos 2^3*4` is `(cos(2^3))*4`.
    fn parse_name(&mut self) -> ParseResult<()> {
        let offset = self.scanner.offset();
        let name = self.scanner.read_name().ok_or_else(|| self.unexpected())?;
        self.scanner.skip_whitespace();

        if let Some(function) = MathFunction::from_name(name) {
            self.parse_negation()?;
            self.program.push(Instruction::ApplyFunction(function));
            return Ok(());
        }

        match self.environment.get(name) {
            Some(value) => {
                self.program.push(Instruction::PushConstant(value));
                Ok(())
            },
            None => Err(ParseError::UnknownIdentifier { name: name.to_string(),
                                                        offset }),
        }
    }
}
