/// Parser state and the top-level driver.
///
/// Holds the scanner, the environment and the program under construction,
/// and splits the input into `;`-separated expressions.
pub mod core;

/// Binary operator levels.
///
/// Sums, products and powers, each a loop over one precedence tier.
pub mod binary;

/// Prefix forms and operands.
///
/// Unary negation, numerals, parenthesized groups, function application and
/// environment lookups.
pub mod unary;

pub use self::core::{MAX_NESTING_DEPTH, ParseResult, parse};
