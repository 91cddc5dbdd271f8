use std::fmt;

use crate::{ast::Name, util::num::format_number};

/// The outcome of one update within a line.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateResult {
    /// `name` now holds the value.
    Assignment(Name, f64),
    /// `name` was removed.
    Deletion(Name),
}

/// What executing a command did.
///
/// Mirrors the branch of [`Command`](crate::ast::Command) that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// An expression evaluated to this value.
    Eval(f64),
    /// A single assignment.
    Assignment(Name, f64),
    /// A single deletion.
    Deletion(Name),
    /// Two or more updates, in execution order.
    Updates(Vec<UpdateResult>),
}

impl CommandResult {
    /// Collapses a one-element update list into its bare variant.
    pub(crate) fn from_updates(mut results: Vec<UpdateResult>) -> Self {
        if results.len() == 1
           && let Some(only) = results.pop()
        {
            return only.into();
        }
        Self::Updates(results)
    }

    /// The lines a transcript shows for this result.
    ///
    /// - `= v` for an evaluated expression,
    /// - `name = v` for an assignment, or `= v` when `name` is `_`,
    /// - `name deleted` for a deletion,
    /// - one line per update for an update list.
    ///
    /// # Example
    /// ```
    /// use linecalc::{
    ///     ast::Name,
    ///     interpreter::command_result::{CommandResult, UpdateResult},
    /// };
    ///
    /// let x = Name::new("x").unwrap();
    /// let result = CommandResult::Updates(vec![UpdateResult::Assignment(x.clone(), 2.5),
    ///                                          UpdateResult::Deletion(x)]);
    /// assert_eq!(result.render_lines(), vec!["x = 2.5", "x deleted"]);
    ///
    /// let last = CommandResult::Assignment(Name::last_result(), 4.0);
    /// assert_eq!(last.render_lines(), vec!["= 4"]);
    /// ```
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        match self {
            Self::Eval(value) => vec![render_value(*value)],
            Self::Assignment(name, value) => vec![render_assignment(name, *value)],
            Self::Deletion(name) => vec![render_deletion(name)],
            Self::Updates(results) => results.iter().map(UpdateResult::render).collect(),
        }
    }
}

impl UpdateResult {
    /// The transcript line for this update.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Assignment(name, value) => render_assignment(name, *value),
            Self::Deletion(name) => render_deletion(name),
        }
    }
}

impl From<UpdateResult> for CommandResult {
    fn from(result: UpdateResult) -> Self {
        match result {
            UpdateResult::Assignment(name, value) => Self::Assignment(name, value),
            UpdateResult::Deletion(name) => Self::Deletion(name),
        }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_lines().join("\n"))
    }
}

fn render_value(value: f64) -> String {
    format!("= {}", format_number(value))
}

fn render_assignment(name: &Name, value: f64) -> String {
    if name.is_last_result() {
        render_value(value)
    } else {
        format!("{name} = {}", format_number(value))
    }
}

fn render_deletion(name: &Name) -> String {
    format!("{name} deleted")
}
