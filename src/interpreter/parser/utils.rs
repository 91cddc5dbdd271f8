use std::iter::Peekable;

use crate::{
    ast::{Expr, Name},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_DEPTH, ParseResult},
    },
};

/// Parses an operand that must follow `after`.
///
/// Checks that the next token can start an expression before delegating to
/// `parse_item`, so that a missing operand is reported against the token that
/// required it, e.g. `expected expression after '+' at end of input`.
///
/// Every nested operand goes through here, so `depth` counts how far the
/// parser has recursed. The operand is parsed at `depth + 1`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the operand.
/// - `after`: The operator or delimiter that requires the operand.
/// - `depth`: Nesting level of the expression holding `after`.
/// - `parse_item`: Parser for the operand's precedence tier.
///
/// # Errors
/// Returns a `ParseError` if the input ends, if the next token cannot start an
/// expression, if the operand would sit deeper than [`MAX_DEPTH`], or if
/// `parse_item` fails.
pub(in crate::interpreter::parser) fn parse_operand<'a, I, T>(
    tokens: &mut Peekable<I>,
    after: &Token,
    depth: usize,
    parse_item: impl Fn(&mut Peekable<I>, usize) -> ParseResult<T>)
    -> ParseResult<T>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let depth = depth + 1;
    match tokens.peek() {
        Some((_, column)) if depth > MAX_DEPTH => Err(ParseError::NestingTooDeep { column: *column }),
        Some((tok, _)) if starts_expression(tok) => parse_item(tokens, depth),
        Some((tok, column)) => Err(ParseError::UnexpectedToken { found:    tok.to_string(),
                                                                 expected: format!("expression after {after}"),
                                                                 column:   *column, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: format!("expression after {after}") }),
    }
}

/// Accepts `expr` if its tree is at most [`MAX_DEPTH`] levels deep.
///
/// Called on every node the parser builds. Operator loops grow their trees
/// to the left without recursing, so recursion depth alone does not bound
/// the tree.
///
/// # Parameters
/// - `expr`: The node just built.
/// - `column`: Column of the operator that built it, for error reporting.
pub(in crate::interpreter::parser) fn within_depth(expr: Expr, column: usize) -> ParseResult<Expr> {
    if expr.depth() > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { column });
    }
    Ok(expr)
}

/// Parses a list of items separated by commas.
///
/// The list ends at the first token that is not a comma; the caller decides
/// whether anything may follow. Items after a comma are parsed with
/// `parse_item`, which reports its own errors.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item.
/// - `parse_item`: Function used to parse each list element.
///
/// # Returns
/// A vector of parsed items, never empty.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = vec![parse_item(tokens)?];
    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        items.push(parse_item(tokens)?);
    }
    Ok(items)
}

/// Parses a plain identifier and returns it as a [`Name`].
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `expected`: Description used in the error, e.g. `variable name after 'del'`.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends.
pub(in crate::interpreter::parser) fn parse_name<'a, I>(tokens: &mut Peekable<I>,
                                                        expected: &str)
                                                        -> ParseResult<Name>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(Name::from_lexeme(s.clone())),
        Some((tok, column)) => Err(ParseError::UnexpectedToken { found:    tok.to_string(),
                                                                 expected: expected.to_string(),
                                                                 column:   *column, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: expected.to_string() }),
    }
}

/// Whether `token` can begin an expression.
const fn starts_expression(token: &Token) -> bool {
    matches!(token,
             Token::Number(_) | Token::Identifier(_) | Token::LParen | Token::Minus)
}
