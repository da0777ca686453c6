use crate::{
    interpreter::replay::StackMachine,
    program::{BinaryOperator, MathFunction},
};

/// Rendered text of one operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    text:    String,
    /// Whether `text` is a single parenthesized group.
    grouped: bool,
}

impl Fragment {
    const fn group(text: String) -> Self {
        Self { text, grouped: true }
    }

    /// The text wrapped in parentheses unless it already is one group.
    fn parenthesized(self) -> String {
        if self.grouped { self.text } else { format!("({})", self.text) }
    }
}

/// Renders a program as fully parenthesized infix text.
///
/// Every operator application gets its own parentheses, which makes the
/// precedence and associativity decisions of the parser visible. Numbers use
/// the shortest text that reads back as the same `f64`, and infinities and
/// NaN are written as the divisions producing them, so the output can be
/// parsed again and evaluates to exactly the same values.
///
/// | instruction        | text                    |
/// |--------------------|-------------------------|
/// | constant `x`       | `x`, or `(-x)` if negative |
/// | infinity / NaN     | `(1/0)` / `(0/0)`       |
/// | function `f` of `x`| `(f(x))`                |
/// | negation of `x`    | `(-x)`                  |
/// | `l op r`           | `(l op r)`              |
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl StackMachine for Renderer {
    type Operand = Fragment;
    type Output = String;

    fn constant(&mut self, value: f64) -> Fragment {
        if value.is_nan() {
            return Fragment::group("(0/0)".to_string());
        }

        let magnitude = if value.is_infinite() {
            Fragment::group("(1/0)".to_string())
        } else {
            Fragment { text:    value.abs().to_string(),
                       grouped: false, }
        };

        if value.is_sign_negative() {
            Fragment::group(format!("(-{})", magnitude.text))
        } else {
            magnitude
        }
    }

    fn function(&mut self, function: MathFunction, operand: Fragment) -> Fragment {
        Fragment::group(format!("({}{})", function.name(), operand.parenthesized()))
    }

    fn negate(&mut self, operand: Fragment) -> Fragment {
        Fragment::group(format!("(-{})", operand.text))
    }

    fn binary(&mut self, op: BinaryOperator, left: Fragment, right: Fragment) -> Fragment {
        Fragment::group(format!("({}{}{})", left.text, op.symbol(), right.text))
    }

    fn finish(&mut self, operand: Fragment) -> String {
        operand.text
    }
}
