use std::iter::Peekable;

use crate::{
    ast::{Command, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_additive,
            update::{looks_like_update, parse_update_list},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting a line may contain.
///
/// Counts parentheses, calls, negations and operator applications along any
/// path of the expression tree. Deeper lines fail with
/// [`ParseError::NestingTooDeep`], which keeps both parsing and evaluation
/// within a fixed amount of stack.
pub const MAX_DEPTH: usize = 256;

/// Parses one tokenized line into a [`Command`].
///
/// The line is treated as an update list when its first tokens read
/// `Name '='` or `del`; otherwise it is parsed as an expression. Once the
/// update-list reading is chosen any later failure is reported as is, with no
/// retry as an expression.
///
/// Grammar: `line := update_list | expr`
///
/// Parsing is total: every token sequence yields a command or an error.
/// Nesting past [`MAX_DEPTH`] is an error, never a stack overflow.
///
/// # Errors
/// Returns a `ParseError` describing the unexpected or missing token,
/// `NestingTooDeep` past [`MAX_DEPTH`], or `UnexpectedTrailingInput` when
/// tokens remain after a complete command.
///
/// # Example
/// ```
/// use linecalc::{
///     ast::Command,
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let tokens = tokenize("x = 2, del y").unwrap();
/// assert!(matches!(parse(&tokens), Ok(Command::Updates(u)) if u.len() == 2));
///
/// let tokens = tokenize("1 + 2 3").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Command> {
    let mut iter = tokens.iter().peekable();

    let command = if looks_like_update(&iter) {
        Command::Updates(parse_update_list(&mut iter)?)
    } else {
        Command::Eval(parse_expression(&mut iter)?)
    };

    match iter.next() {
        None => Ok(command),
        Some((Token::RParen, column)) => Err(ParseError::UnmatchedClosingParen { column: *column }),
        Some((tok, column)) => Err(ParseError::UnexpectedTrailingInput { found:  tok.to_string(),
                                                                         column: *column, }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expr := term (("+" | "-") term)*`
///
/// The expression is parsed as the root of the tree, at depth zero.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens, 0)
}
