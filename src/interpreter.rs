/// The named constants identifiers resolve to.
///
/// The environment is assembled before parsing and is read-only afterwards.
/// It starts with `e` and `pi` and can be extended with further constants.
pub mod environment;
/// The arithmetic interpreter.
///
/// Replays a program over doubles and yields one value per expression.
///
/// # Responsibilities
/// - Applies the transcendental functions and binary operators.
/// - Follows IEEE 754 semantics without special cases.
pub mod evaluator;
/// The parser turns source text into a postfix program in a single pass.
///
/// Each precedence tier is one recursive rule. Rules emit their instruction
/// after their operands, so no syntax tree is ever built.
///
/// # Responsibilities
/// - Recognizes sums, products, negation, powers and operands.
/// - Resolves identifiers against the environment.
/// - Reports the first syntax fault with its position.
pub mod parser;
/// The renderer.
///
/// Replays a program over text and yields a fully parenthesized rendering of
/// each expression.
pub mod renderer;
/// The stack discipline shared by the renderer and the evaluator.
pub mod replay;
/// The scanner walks the source text one token at a time.
///
/// There is no token buffer: the parser inspects the character under the
/// cursor and asks the scanner to consume a numeral, a name or a single
/// character.
pub mod scanner;
