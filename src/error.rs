/// Lexing errors.
///
/// Raised while splitting a line into tokens: characters outside the
/// language's alphabet and malformed numeric literals.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into a
/// [`Command`](crate::ast::Command). Parse errors carry the 1-based column of
/// the offending token and a description of what was expected.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an expression
/// or executing updates against a variable store.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure that can occur while processing one input line.
///
/// The `Display` text is exactly what the transcript shows to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The line contains an unrecognized character or malformed number.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The line is not grammatically valid.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation or execution failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
