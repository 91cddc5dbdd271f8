use thiserror::Error;

/// Represents all errors that can occur while tokenizing a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unrecognized character '{character}' at column {column}")]
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// 1-based column of the character.
        column:    usize,
    },
    /// A numeric literal with more than one decimal point, or a decimal point
    /// without digits on both sides.
    #[error("malformed number '{literal}' at column {column}")]
    MalformedNumber {
        /// The literal as written.
        literal: String,
        /// 1-based column where the literal starts.
        column:  usize,
    },
}
