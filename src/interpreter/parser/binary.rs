use crate::{
    interpreter::parser::core::{ParseResult, Parser},
    program::{BinaryOperator, Instruction},
};

impl Parser<'_, '_> {
    /// Parses addition and subtraction.
    ///
    /// Left-associative: each operator is emitted as soon as its right
    /// operand is complete, so `8 - 3 - 2` becomes `8 3 - 2 -`.
    ///
    /// Grammar: `sum := product (("+" | "-") product)*`
    pub(crate) fn parse_sum(&mut self) -> ParseResult<()> {
        self.parse_product()?;

        while let Some(op) = self.peek_operator(&[BinaryOperator::Add, BinaryOperator::Sub]) {
            self.scanner.advance_after_token();
            self.parse_product()?;
            self.program.push(Instruction::BinaryOp(op));
        }

        Ok(())
    }

    /// Parses multiplication and division.
    ///
    /// Grammar: `product := negation (("*" | "/") negation)*`
    pub(crate) fn parse_product(&mut self) -> ParseResult<()> {
        self.parse_negation()?;

        while let Some(op) = self.peek_operator(&[BinaryOperator::Mul, BinaryOperator::Div]) {
            self.scanner.advance_after_token();
            self.parse_negation()?;
            self.program.push(Instruction::BinaryOp(op));
        }

        Ok(())
    }

    /// Parses exponentiation.
    ///
    /// The right operand goes through the negation level, which recurses
    /// back into this one, so `^` is right-associative and a minus sign
    /// captures the whole tower after it: `2^-3^4` is `2^(-(3^4))`.
    ///
    /// Grammar: `power := primary ("^" negation)*`
    pub(crate) fn parse_power(&mut self) -> ParseResult<()> {
        self.parse_primary()?;

        while self.peek_operator(&[BinaryOperator::Pow]).is_some() {
            self.scanner.advance_after_token();
            self.parse_negation()?;
            self.program.push(Instruction::BinaryOp(BinaryOperator::Pow));
        }

        Ok(())
    }

    /// Returns the operator under the cursor if it is one of `allowed`.
    fn peek_operator(&self, allowed: &[BinaryOperator]) -> Option<BinaryOperator> {
        self.scanner
            .current()
            .and_then(BinaryOperator::from_symbol)
            .filter(|op| allowed.contains(op))
    }
}
