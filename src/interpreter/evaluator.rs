/// The arithmetic stack machine.
///
/// Replays a program over `f64` operands and reports one number per
/// expression.
pub mod core;

/// Transcendental function application.
pub mod function;

/// Binary operator arithmetic.
pub mod binary;

pub use self::core::Arithmetic;
