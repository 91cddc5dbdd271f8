use std::iter::Peekable;

use crate::{
    ast::{Expr, Name},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_additive,
            core::ParseResult,
            utils::{parse_operand, within_depth},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-associative, so `--x` is parsed as `-(-x)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting level of this expression.
///
/// # Returns
/// An [`Expr::Negate`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((token @ Token::Minus, column)) = tokens.peek() {
        tokens.next();
        let expr = parse_operand(tokens, token, depth, parse_unary)?;
        within_depth(Expr::Negate(Box::new(expr)), *column)
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include
/// numeric literals, variable references, function calls and parenthesized
/// expressions.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | NAME "(" expr ")"
///              | NAME
///              | "(" expr ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Nesting level of this expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), _)) => Ok(Expr::Number(*n)),
        Some((Token::Identifier(name), _)) => parse_variable_or_call(tokens, name, depth),
        Some((Token::LParen, column)) => parse_grouping(tokens, *column, depth),
        Some((Token::RParen, column)) => Err(ParseError::UnmatchedClosingParen { column: *column }),
        Some((tok, column)) => Err(ParseError::UnexpectedToken { found:    tok.to_string(),
                                                                 expected: "expression".to_string(),
                                                                 column:   *column, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "expression".to_string() }),
    }
}

/// Parses the remainder of a parenthesized expression.
///
/// Expected form `( expr )`, with the opening parenthesis already consumed.
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after `(`.
/// - `opened`: Column of the `(`, for error reporting.
/// - `depth`: Nesting level of the group.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, opened: usize, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_operand(tokens, &Token::LParen, depth, parse_additive)?;
    expect_closing_paren(tokens, opened)?;
    Ok(expr)
}

/// Parses a variable reference or, when followed by `(`, a function call.
///
/// Functions take exactly one argument: `name(expr)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after the identifier.
/// - `name`: The identifier text.
/// - `depth`: Nesting level of the variable or call.
///
/// # Returns
/// - [`Expr::FunctionCall`] if followed by parentheses,
/// - [`Expr::Variable`] otherwise.
fn parse_variable_or_call<'a, I>(tokens: &mut Peekable<I>,
                                 name: &str,
                                 depth: usize)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = Name::from_lexeme(name.to_string());

    match tokens.peek() {
        Some((Token::LParen, column)) => {
            tokens.next();
            let argument = parse_operand(tokens, &Token::LParen, depth, parse_additive)?;
            expect_closing_paren(tokens, *column)?;
            within_depth(Expr::FunctionCall { name,
                                              argument: Box::new(argument) },
                         *column)
        },
        _ => Ok(Expr::Variable(name)),
    }
}

/// Consumes a `)` closing the `(` at column `opened`.
fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>, opened: usize) -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((tok, _)) => Err(ParseError::ExpectedClosingParen { opened,
                                                                 found: tok.to_string() }),
        None => Err(ParseError::ExpectedClosingParen { opened,
                                                       found: "end of input".to_string() }),
    }
}
