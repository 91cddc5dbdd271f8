/// Core evaluation logic.
///
/// Contains the expression walker and the evaluator's result type.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+ - * / ^` over `f64`, including the division-by-zero rule.
pub mod binary;

/// Function evaluation.
///
/// Holds the fixed built-in function table and its dispatch.
pub mod function;

pub use self::core::{EvalResult, eval};
