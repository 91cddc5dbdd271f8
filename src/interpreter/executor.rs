use tracing::warn;

use crate::{
    ast::{Command, Name, Update},
    interpreter::{
        command_result::{CommandResult, UpdateResult},
        evaluator::{EvalResult, eval},
        store::VariableStore,
    },
};

/// Executes a parsed command against a store.
///
/// - `Eval(e)` evaluates `e`, writes the value into the `_` register, and
///   returns [`CommandResult::Eval`].
/// - `Updates(list)` runs each update in order. Every assignment sees the
///   store as left by the updates before it. A line with one update returns
///   its [`CommandResult::Assignment`] or [`CommandResult::Deletion`]; longer
///   lines return [`CommandResult::Updates`].
///
/// A failing update stops the line. Updates before it stay committed and
/// nothing is rolled back.
///
/// # Errors
/// Evaluator and store errors, propagated unchanged.
///
/// # Example
/// ```
/// use linecalc::{
///     interpreter::{command_result::CommandResult, executor::execute, store::MemoryStore},
///     parse_line,
/// };
///
/// let mut store = MemoryStore::new();
/// let command = parse_line("x = 5, y = x + 1").unwrap();
/// let result = execute(&mut store, &command).unwrap();
/// assert_eq!(result.to_string(), "x = 5\ny = 6");
///
/// let command = parse_line("y * 2").unwrap();
/// assert_eq!(execute(&mut store, &command), Ok(CommandResult::Eval(12.0)));
/// ```
pub fn execute<S>(store: &mut S, command: &Command) -> EvalResult<CommandResult>
    where S: VariableStore + ?Sized
{
    match command {
        Command::Eval(expr) => {
            let value = eval(expr, &*store)?;
            store.set(&Name::last_result(), value);
            Ok(CommandResult::Eval(value))
        },
        Command::Updates(updates) => {
            let mut results = Vec::with_capacity(updates.len());
            for update in updates {
                match execute_update(store, update) {
                    Ok(result) => results.push(result),
                    Err(e) => {
                        if !results.is_empty() {
                            warn!(committed = results.len(),
                                  total = updates.len(),
                                  error = %e,
                                  "update line failed after partial commit");
                        }
                        return Err(e);
                    },
                }
            }
            Ok(CommandResult::from_updates(results))
        },
    }
}

/// Executes a single assignment or deletion.
fn execute_update<S>(store: &mut S, update: &Update) -> EvalResult<UpdateResult>
    where S: VariableStore + ?Sized
{
    match update {
        Update::Assignment { name, value } => {
            let value = eval(value, &*store)?;
            store.set(name, value);
            Ok(UpdateResult::Assignment(name.clone(), value))
        },
        Update::Deletion(name) => {
            store.remove(name)?;
            Ok(UpdateResult::Deletion(name.clone()))
        },
    }
}
