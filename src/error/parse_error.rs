use std::fmt::Write as _;

/// Number of input characters shown after the fault position by
/// [`ParseError::excerpt`] when the caller has no preference.
pub const DEFAULT_CONTEXT_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every syntax fault that can abort a parse.
///
/// All offsets are byte offsets into the parsed source.
pub enum ParseError {
    /// A character that cannot start or continue an expression here.
    UnexpectedCharacter {
        /// The offending character.
        found:  char,
        /// Where it was found.
        offset: usize,
    },
    /// A `(` whose matching `)` never arrived.
    UnterminatedParenthesis {
        /// Where the `)` was expected.
        offset: usize,
    },
    /// A name that is neither a function nor an environment entry.
    UnknownIdentifier {
        /// The name as written.
        name:   String,
        /// Where the name starts.
        offset: usize,
    },
    /// The input ended where an operand was required.
    UnexpectedEndOfInput {
        /// The length of the input.
        offset: usize,
    },
    /// A complete expression was followed by something other than `;` or the
    /// end of the input.
    MissingSeparator {
        /// The character found instead.
        found:  char,
        /// Where it was found.
        offset: usize,
    },
    /// Operands nested deeper than the parser accepts.
    NestingTooDeep {
        /// Where the operand that went too deep starts.
        offset: usize,
    },
}

impl ParseError {
    /// The byte offset at which the fault was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { offset, .. }
            | Self::UnterminatedParenthesis { offset }
            | Self::UnknownIdentifier { offset, .. }
            | Self::UnexpectedEndOfInput { offset }
            | Self::MissingSeparator { offset, .. }
            | Self::NestingTooDeep { offset } => *offset,
        }
    }

    /// Formats the error followed by the input from the fault onwards and a
    /// caret pointing at its first character.
    ///
    /// At most `width` characters of context are shown. Control characters
    /// are escaped so the caret stays aligned with what is printed.
    ///
    /// # Parameters
    /// - `source`: The text that was parsed.
    /// - `width`: Maximum number of characters of context.
    ///
    /// # Example
    /// ```
    /// use postfix_calc::{interpreter::environment::Environment, parse};
    ///
    /// let source = "1 + foo * 2";
    /// let error = parse(source, &Environment::new()).unwrap_err();
    ///
    /// assert_eq!(error.excerpt(source, 5),
    ///            "Error at offset 4: Unknown name 'foo'.\nfoo *\n^");
    /// ```
    #[must_use]
    pub fn excerpt(&self, source: &str, width: usize) -> String {
        let mut message = format!("{self}\n");

        let context = source.get(self.offset()..).unwrap_or_default();
        for c in context.chars().take(width) {
            if c.is_control() {
                let _ = write!(message, "{}", c.escape_default());
            } else {
                message.push(c);
            }
        }

        message.push_str("\n^");
        message
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, offset } => {
                write!(f, "Error at offset {offset}: Unexpected character {found:?}.")
            },

            Self::UnterminatedParenthesis { offset } => {
                write!(f, "Error at offset {offset}: Expected closing parenthesis ')'.")
            },

            Self::UnknownIdentifier { name, offset } => {
                write!(f, "Error at offset {offset}: Unknown name '{name}'.")
            },

            Self::UnexpectedEndOfInput { offset } => {
                write!(f, "Error at offset {offset}: Unexpected end of input.")
            },

            Self::MissingSeparator { found, offset } => {
                write!(f, "Error at offset {offset}: Expected ';' or end of input, found {found:?}.")
            },

            Self::NestingTooDeep { offset } => {
                write!(f, "Error at offset {offset}: Expression is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
