//! # linecalc
//!
//! linecalc is a line-oriented calculator engine written in Rust.
//! Each input line is an arithmetic expression, one or more comma-separated
//! variable assignments, or variable deletions. Lines are evaluated against a
//! persistent set of named `f64` variables.
//!
//! ```
//! use linecalc::Session;
//!
//! let mut session = Session::new();
//! assert_eq!(session.respond("r = 2, area = pi * r ^ 2"), "r = 2\narea = 12.56636");
//! assert_eq!(session.respond("sqrt(area / pi)"), "= 2");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

/// Defines the structure of parsed lines.
///
/// This module declares [`Name`](ast::Name), the [`Expr`](ast::Expr) tree,
/// and the [`Command`](ast::Command) and [`Update`](ast::Update) types the
/// parser produces and the executor consumes.
///
/// # Responsibilities
/// - Validates variable names.
/// - Models expressions as immutable, acyclic trees.
/// - Distinguishes expression lines from update lines.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every public entry point returns one of these instead of panicking. The
/// `Display` text of each error is the message shown to the user.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches columns and names for context.
/// - Unifies stages under [`CalcError`](error::CalcError).
pub mod error;
/// Orchestrates line processing.
///
/// This module ties together lexing, parsing, variable storage, evaluation
/// and execution.
///
/// # Responsibilities
/// - Coordinates the pipeline stages.
/// - Exposes each stage for hosts that need finer control.
pub mod interpreter;
/// Sessions and the one-call line entry points.
pub mod session;
/// General utilities for number formatting and parsing.
pub mod util;

pub use error::CalcError;
pub use interpreter::command_result::{CommandResult, UpdateResult};
pub use session::{Session, parse_line};
