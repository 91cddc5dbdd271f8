/// Built-in function implementations.
///
/// Contains the trigonometric and square-root functions available in every
/// session.
pub mod builtin;

/// The function table and its lookup.
pub mod core;

pub use self::core::{BUILTIN_FUNCTIONS, call_builtin};
