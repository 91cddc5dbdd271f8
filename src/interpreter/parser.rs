/// Entry points for parsing a whole line or a single expression.
///
/// Decides whether a line is an update list or an expression, and rejects
/// unconsumed trailing tokens.
pub mod core;

/// Update-list parsing.
///
/// Handles comma-separated assignments (`x = 1`) and deletions (`del x`).
pub mod update;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and power tiers of the precedence
/// hierarchy.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles negation, literals, variables, function calls and parenthesized
/// groups.
pub mod unary;

/// Utility functions shared by the parser tiers.
pub mod utils;

pub use self::core::{MAX_DEPTH, ParseResult, parse, parse_expression};
