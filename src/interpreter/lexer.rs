use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::LexError;

/// Represents a lexical token in a calculator line.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace between tokens is skipped.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// Any run of digits and dots is matched here so that `1.2.3` or `3.` are
    /// reported as one malformed literal instead of being split apart.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `del`
    #[token("del")]
    Del,
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "'{n}'"),
            Self::Identifier(name) => write!(f, "'{name}'"),
            Self::Del => f.write_str("'del'"),
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Star => f.write_str("'*'"),
            Self::Slash => f.write_str("'/'"),
            Self::Caret => f.write_str("'^'"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
            Self::Equals => f.write_str("'='"),
            Self::Comma => f.write_str("','"),
        }
    }
}

/// Why logos rejected a slice of input.
///
/// Converted into a positioned [`LexError`] by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token pattern matched the next character.
    #[default]
    UnrecognizedCharacter,
    /// A digits-and-dots run that is not `digits` or `digits.digits`.
    MalformedNumber,
}

/// Parses a numeric literal from the current token slice.
///
/// Accepts `123` and `3.14`. Rejects literals with several decimal points and
/// a decimal point lacking digits on either side (`3.`, `.5`, `.`).
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexErrorKind> {
    let literal = lex.slice();
    let mut parts = literal.split('.');

    let well_formed = match (parts.next(), parts.next(), parts.next()) {
        (Some(whole), None, None) => !whole.is_empty(),
        (Some(whole), Some(fraction), None) => !whole.is_empty() && !fraction.is_empty(),
        _ => false,
    };

    if !well_formed {
        return Err(LexErrorKind::MalformedNumber);
    }
    literal.parse().map_err(|_| LexErrorKind::MalformedNumber)
}

/// Splits one line into tokens, each paired with its 1-based column.
///
/// Tokens are produced strictly left to right. The first unrecognized
/// character or malformed number stops lexing.
///
/// # Errors
/// Returns a [`LexError`] naming the offending text and its column.
///
/// # Example
/// ```
/// use linecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("del x").unwrap();
/// assert_eq!(tokens, vec![(Token::Del, 1), (Token::Identifier("x".into()), 5)]);
///
/// assert!(tokenize("1.2.3").is_err());
/// assert!(tokenize("4 % 2").is_err());
/// ```
pub fn tokenize(line: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        let start = lexer.span().start;
        let column = column_at(line, start);

        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(LexErrorKind::MalformedNumber) => {
                return Err(LexError::MalformedNumber { literal: lexer.slice().to_string(),
                                                       column });
            },
            Err(LexErrorKind::UnrecognizedCharacter) => {
                let character = line[start..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnrecognizedCharacter { character, column });
            },
        }
    }

    trace!(?tokens, "tokenized line");
    Ok(tokens)
}

/// Converts a byte offset into a 1-based character column.
fn column_at(line: &str, byte_offset: usize) -> usize {
    line.get(..byte_offset)
        .map_or(byte_offset, |prefix| prefix.chars().count())
    + 1
}
