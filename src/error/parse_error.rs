use thiserror::Error;

/// Represents all errors that can occur during parsing.
///
/// `found` and `expected` fields hold human-readable descriptions, e.g.
/// `'+'` or `expression after '('`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line ended while something else was still required.
    #[error("expected {expected} at end of input")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
    },
    /// Found a token that cannot appear at this position.
    #[error("unexpected token {found} at column {column}, expected {expected}")]
    UnexpectedToken {
        /// The token encountered.
        found:    String,
        /// What the parser was looking for.
        expected: String,
        /// 1-based column of the token.
        column:   usize,
    },
    /// A `)` with no `(` to close.
    #[error("unexpected token ')' at column {column}: no matching '('")]
    UnmatchedClosingParen {
        /// 1-based column of the `)`.
        column: usize,
    },
    /// A `(` that is never closed.
    #[error("expected ')' to close '(' at column {opened}, found {found}")]
    ExpectedClosingParen {
        /// 1-based column of the unmatched `(`.
        opened: usize,
        /// The token found instead, or `end of input`.
        found:  String,
    },
    /// Parentheses, negations or operator chains nest past
    /// [`MAX_DEPTH`](crate::interpreter::parser::MAX_DEPTH) levels.
    #[error("expression nested too deeply at column {column}")]
    NestingTooDeep {
        /// 1-based column of the token that went past the limit.
        column: usize,
    },
    /// A complete command was parsed but tokens remain.
    #[error("unexpected trailing input {found} at column {column}")]
    UnexpectedTrailingInput {
        /// The first extra token.
        found:  String,
        /// 1-based column of that token.
        column: usize,
    },
}
