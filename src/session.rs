use tracing::debug;

use crate::{
    ast::{Command, Name},
    error::CalcError,
    interpreter::{
        command_result::CommandResult,
        executor::execute,
        lexer::tokenize,
        parser::parse,
        store::{DEFAULT_CONSTANTS, MemoryStore, VariableStore},
    },
};

/// Lexes and parses one line.
///
/// # Errors
/// A [`CalcError::Lex`] or [`CalcError::Parse`] describing the first problem.
///
/// # Example
/// ```
/// use linecalc::{ast::Command, parse_line};
///
/// assert!(matches!(parse_line("1 + 2 * 3"), Ok(Command::Eval(_))));
/// assert!(parse_line("1 +").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<Command, CalcError> {
    let tokens = tokenize(line)?;
    Ok(parse(&tokens)?)
}

/// One calculator session: a variable store plus the line-processing
/// pipeline.
///
/// ## Usage
///
/// `Session` is created once and reused for every line the user enters.
/// Variables assigned on one line are visible to the next; nothing survives
/// the session.
///
/// Lines are processed synchronously and the session holds no locks. A host
/// sharing one session between threads must serialize whole lines.
#[derive(Debug, Clone)]
pub struct Session<S = MemoryStore> {
    store: S,
}

impl Session<MemoryStore> {
    /// Creates a session over an in-memory store seeded with
    /// [`DEFAULT_CONSTANTS`].
    ///
    /// # Example
    /// ```
    /// use linecalc::Session;
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.respond("3 + 4"), "= 7");
    /// assert_eq!(session.respond("_ * 2"), "= 14");
    /// assert_eq!(session.respond("del pi"), "pi deleted");
    /// assert_eq!(session.respond("pi"), "undefined variable 'pi'");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self { store: MemoryStore::new() }
    }

    /// Creates a session seeded with [`DEFAULT_CONSTANTS`] and then
    /// `defaults`, later entries overriding earlier ones.
    #[must_use]
    pub fn with_defaults(defaults: impl IntoIterator<Item = (Name, f64)>) -> Self {
        let mut store = MemoryStore::new();
        store.extend(defaults);
        Self { store }
    }
}

impl Default for Session<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: VariableStore> Session<S> {
    /// Creates a session over `store`, adding each of [`DEFAULT_CONSTANTS`]
    /// the store does not already hold. Existing values are left alone.
    pub fn with_store(mut store: S) -> Self {
        for &(name, value) in DEFAULT_CONSTANTS {
            if let Some(name) = Name::new(name)
               && store.get(&name).is_err()
            {
                store.set(&name, value);
            }
        }
        Self { store }
    }

    /// The session's store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The session's store, mutably.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Ends the session and returns its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Lexes, parses and executes one line.
    ///
    /// On failure the store keeps any updates committed before the failing
    /// one.
    ///
    /// # Errors
    /// The lexing, parsing or runtime failure, as a [`CalcError`].
    pub fn run_line(&mut self, line: &str) -> Result<CommandResult, CalcError> {
        let command = parse_line(line)?;
        debug!(?command, "parsed line");

        let result = execute(&mut self.store, &command)?;
        debug!(?result, "executed line");
        Ok(result)
    }

    /// Processes one line and returns the transcript text for it.
    ///
    /// Successful results render as described by
    /// [`CommandResult::render_lines`], joined by newlines. Failures render as
    /// the error message.
    pub fn respond(&mut self, line: &str) -> String {
        match self.run_line(line) {
            Ok(result) => result.to_string(),
            Err(e) => {
                debug!(error = ?e, line, "line failed");
                e.to_string()
            },
        }
    }
}
