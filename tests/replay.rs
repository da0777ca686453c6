use postfix_calc::{
    error::ReplayError,
    interpreter::environment::Environment,
    parse,
    program::{BinaryOperator, Instruction, MathFunction, Program},
};
use pretty_assertions::assert_eq;

#[test]
fn hand_assembled_program_replays() {
    let program = Program::from_instructions(vec![Instruction::PushConstant(0.0),
                                                  Instruction::ApplyFunction(MathFunction::Cos),
                                                  Instruction::UnaryNegate,
                                                  Instruction::EndExpression]);

    assert_eq!(program.render().unwrap(), ["(-(cos(0)))"]);
    assert_eq!(program.evaluate().unwrap(), [-1.0]);
}

#[test]
fn missing_operand_is_underflow() {
    let program = Program::from_instructions(vec![Instruction::PushConstant(1.0),
                                                  Instruction::BinaryOp(BinaryOperator::Add),
                                                  Instruction::EndExpression]);
    let expected = ReplayError::StackUnderflow { index:       1,
                                                 instruction: Instruction::BinaryOp(BinaryOperator::Add), };

    assert_eq!(program.render(), Err(expected.clone()));
    assert_eq!(program.evaluate(), Err(expected));
}

#[test]
fn end_on_empty_stack_is_underflow() {
    let program = Program::from_instructions(vec![Instruction::EndExpression]);

    assert!(matches!(program.evaluate(),
                     Err(ReplayError::StackUnderflow { index: 0, .. })));
}

#[test]
fn leftover_operands_are_reported() {
    let program = Program::from_instructions(vec![Instruction::PushConstant(1.0),
                                                  Instruction::PushConstant(2.0),
                                                  Instruction::EndExpression]);

    assert_eq!(program.evaluate(), Err(ReplayError::UnbalancedStack { remaining: 1 }));

    let unterminated = Program::from_instructions(vec![Instruction::PushConstant(1.0)]);
    assert_eq!(unterminated.render(), Err(ReplayError::UnbalancedStack { remaining: 1 }));
}

#[test]
fn parsed_program_is_postfix() {
    let program = parse("-2^x; 1", &Environment::new().with_constant("x", 3.0).unwrap()).unwrap();

    assert_eq!(program.instructions(),
               [Instruction::PushConstant(2.0),
                Instruction::PushConstant(3.0),
                Instruction::BinaryOp(BinaryOperator::Pow),
                Instruction::UnaryNegate,
                Instruction::EndExpression,
                Instruction::PushConstant(1.0),
                Instruction::EndExpression]);
    assert_eq!(program.expression_count(), 2);
}

#[test]
fn disassembly_lists_every_instruction() {
    let program = parse("log 2 / 4", &Environment::new()).unwrap();

    assert_eq!(program.to_string(),
               "0000 push 2\n0001 call log\n0002 push 4\n0003 binop /\n0004 end\n");
}

#[test]
fn understanding_terminates_each_expression() {
    let program = parse("1+2;3", &Environment::new()).unwrap();

    assert_eq!(program.understanding().unwrap(), "(1+2);\n3;\n");
    assert_eq!(Program::default().understanding().unwrap(), "");
}
