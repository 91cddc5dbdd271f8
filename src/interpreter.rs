/// The lexer module tokenizes a line for further parsing.
///
/// The lexer reads the raw line and produces a stream of tokens, each paired
/// with its column: numbers, identifiers, the `del` keyword, operators and
/// punctuation. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens with source columns.
/// - Rejects malformed numbers and characters outside the language.
pub mod lexer;
/// The parser module builds a [`Command`](crate::ast::Command) from tokens.
///
/// The parser is recursive descent with one function per precedence tier. It
/// decides between an update list and an expression, and reports structured
/// errors naming what it found and what it expected.
///
/// # Responsibilities
/// - Converts tokens into expression trees and update lists.
/// - Enforces precedence and associativity of `+ - * / ^` and unary minus.
/// - Rejects unconsumed trailing input.
pub mod parser;
/// The store module abstracts where variables live.
///
/// Expressions resolve names and functions through the
/// [`VariableStore`](store::VariableStore) trait, backed either by an
/// in-memory map or by a host application's own capabilities.
pub mod store;
/// The evaluator module computes the value of expression trees.
///
/// # Responsibilities
/// - Evaluates literals, variables, negation, binary operations and calls.
/// - Reports undefined variables, unknown functions and division by zero.
pub mod evaluator;
/// The executor module applies commands to a store.
///
/// Evaluates expressions into the `_` register and runs update lists in
/// order, committing each update as it goes.
pub mod executor;
/// The command result module describes what a command did.
///
/// Defines [`CommandResult`](command_result::CommandResult) and renders it
/// into transcript lines.
pub mod command_result;
