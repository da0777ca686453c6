#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents an environment entry that was refused.
pub enum DefinitionError {
    /// The name is not a valid identifier, so it could never be referenced.
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// The name belongs to a built-in function.
    ReservedName {
        /// The rejected name.
        name: String,
    },
    /// The name is already bound.
    DuplicateName {
        /// The rejected name.
        name: String,
    },
}

impl std::fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName { name } => write!(f, "'{name}' is not a valid name."),
            Self::ReservedName { name } => write!(f, "Name '{name}' is reserved for a function."),
            Self::DuplicateName { name } => write!(f, "Name '{name}' is already defined."),
        }
    }
}

impl std::error::Error for DefinitionError {}
