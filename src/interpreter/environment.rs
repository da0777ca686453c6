use std::collections::HashMap;

use crate::{error::DefinitionError, interpreter::scanner::is_name_start, program::MathFunction};

/// The named constants available to every expression.
///
/// An environment is assembled up front, then handed to the parser by shared
/// reference; nothing reachable from a parse can modify it. Lookups are exact
/// and case-sensitive.
///
/// # Example
/// ```
/// use postfix_calc::interpreter::environment::Environment;
///
/// let env = Environment::new().with_constant("g", 9.81).unwrap();
///
/// assert_eq!(env.get("pi"), Some(std::f64::consts::PI));
/// assert_eq!(env.get("g"), Some(9.81));
/// assert_eq!(env.get("PI"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    constants: HashMap<String, f64>,
}

impl Environment {
    /// Creates an environment holding `e` and `pi`.
    #[must_use]
    pub fn new() -> Self {
        let mut constants = HashMap::new();
        constants.insert("e".to_string(), std::f64::consts::E);
        constants.insert("pi".to_string(), std::f64::consts::PI);
        Self { constants }
    }

    /// Creates an environment with no constants at all.
    #[must_use]
    pub fn empty() -> Self {
        Self { constants: HashMap::new() }
    }

    /// Adds a constant, returning the extended environment.
    ///
    /// # Errors
    /// - `InvalidName` if `name` is not a letter or `_` followed by letters,
    ///   digits and underscores.
    /// - `ReservedName` if `name` is one of the built-in functions.
    /// - `DuplicateName` if `name` is already bound.
    pub fn with_constant(mut self, name: &str, value: f64) -> Result<Self, DefinitionError> {
        let mut chars = name.chars();
        let well_formed = chars.next().is_some_and(is_name_start)
                          && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !well_formed {
            return Err(DefinitionError::InvalidName { name: name.to_string() });
        }
        if MathFunction::from_name(name).is_some() {
            return Err(DefinitionError::ReservedName { name: name.to_string() });
        }
        if self.constants.contains_key(name) {
            return Err(DefinitionError::DuplicateName { name: name.to_string() });
        }

        self.constants.insert(name.to_string(), value);
        Ok(self)
    }

    /// Looks up a constant by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.constants.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
