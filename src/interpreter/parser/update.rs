use std::iter::Peekable;

use crate::{
    ast::Update,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_additive,
            core::ParseResult,
            utils::{parse_comma_separated, parse_name, parse_operand},
        },
    },
};

/// Whether the line at `tokens` reads as an update list.
///
/// An update list starts with `del` or with `NAME =`. Looks ahead without
/// consuming anything.
pub(in crate::interpreter::parser) fn looks_like_update<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    match lookahead.next() {
        Some((Token::Del, _)) => true,
        Some((Token::Identifier(_), _)) => matches!(lookahead.next(), Some((Token::Equals, _))),
        _ => false,
    }
}

/// Parses a comma-separated list of assignments and deletions.
///
/// Grammar: `update_list := update ("," update)*`
///
/// Updates keep their source order, which is also their execution order.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first update.
///
/// # Returns
/// The parsed updates, at least one.
pub fn parse_update_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Update>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let first = parse_update(tokens)?;
    let mut updates = vec![first];

    if let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        let rest = parse_comma_separated(tokens, |tokens| {
                       match tokens.peek() {
                           Some((Token::Del | Token::Identifier(_), _)) => parse_update(tokens),
                           Some((tok, column)) => Err(ParseError::UnexpectedToken {
                               found:    tok.to_string(),
                               expected: "assignment or deletion after ','".to_string(),
                               column:   *column,
                           }),
                           None => Err(ParseError::UnexpectedEndOfInput {
                               expected: "assignment or deletion after ','".to_string(),
                           }),
                       }
                   })?;
        updates.extend(rest);
    }

    Ok(updates)
}

/// Parses a single update.
///
/// Grammar:
/// ```text
///     update := "del" NAME
///             | NAME "=" expr
/// ```
/// # Errors
/// Returns a `ParseError` if the name, the `=` or the value expression is
/// missing or malformed.
fn parse_update<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Update>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Del, _)) = tokens.peek() {
        tokens.next();
        let name = parse_name(tokens, "variable name after 'del'")?;
        return Ok(Update::Deletion(name));
    }

    let name = parse_name(tokens, "assignment or deletion")?;
    let expected_equals = format!("'=' after '{name}'");
    match tokens.next() {
        Some((Token::Equals, _)) => {},
        Some((tok, column)) => {
            return Err(ParseError::UnexpectedToken { found: tok.to_string(),
                                                     expected: expected_equals,
                                                     column: *column });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { expected: expected_equals }),
    }

    let value = parse_operand(tokens, &Token::Equals, 0, parse_additive)?;
    Ok(Update::Assignment { name, value })
}
