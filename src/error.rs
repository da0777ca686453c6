use std::fmt;

/// Environment definition errors.
///
/// Raised while building an environment, before any source is parsed: a
/// constant whose name could never be referenced, or that clashes with a
/// function or another constant.
pub mod definition_error;
/// Parsing errors.
///
/// Defines every syntax fault the parser can detect, together with the byte
/// offset at which it was detected and a helper that renders a caret excerpt
/// of the offending input.
pub mod parse_error;
/// Replay errors.
///
/// Raised when an instruction sequence is not a valid postfix program. The
/// parser never produces such a sequence, so these signal a broken invariant
/// rather than bad user input.
pub mod replay_error;

pub use definition_error::DefinitionError;
pub use parse_error::ParseError;
pub use replay_error::ReplayError;

/// Any failure of the [`crate::Evaluator`] facade.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The source text is not a valid input.
    Parse(ParseError),
    /// A program could not be replayed.
    Replay(ReplayError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Replay(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Replay(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ReplayError> for Error {
    fn from(e: ReplayError) -> Self {
        Self::Replay(e)
    }
}
