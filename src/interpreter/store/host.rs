use thiserror::Error;

use crate::{
    ast::Name,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, store::VariableStore},
};

/// A host reported that a variable or function does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not found")]
pub struct NotFound;

/// Capabilities a presentation layer exposes to the engine.
///
/// A host owns the storage medium (a form's state, a spreadsheet, a remote
/// service) and answers these calls; the engine never sees more than this.
pub trait Host {
    /// Reads a variable.
    fn get_variable(&self, name: &str) -> Result<f64, NotFound>;

    /// Writes a variable, replacing any previous value.
    fn set_variable(&mut self, name: &str, value: f64);

    /// Removes a variable.
    fn clear_variable(&mut self, name: &str) -> Result<(), NotFound>;

    /// Applies a function the host knows about.
    fn invoke_function(&self, name: &str, value: f64) -> Result<f64, NotFound>;
}

/// Presents any [`Host`] as a [`VariableStore`].
///
/// `NotFound` from variable calls becomes `UndefinedVariable`, and from
/// function calls `UnknownFunction`, so the evaluator and executor behave
/// exactly as they do against a [`MemoryStore`](super::MemoryStore).
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use linecalc::interpreter::store::{Host, HostStore, NotFound};
/// use linecalc::Session;
///
/// #[derive(Default)]
/// struct Form {
///     fields: HashMap<String, f64>,
/// }
///
/// impl Host for Form {
///     fn get_variable(&self, name: &str) -> Result<f64, NotFound> {
///         self.fields.get(name).copied().ok_or(NotFound)
///     }
///
///     fn set_variable(&mut self, name: &str, value: f64) {
///         self.fields.insert(name.to_string(), value);
///     }
///
///     fn clear_variable(&mut self, name: &str) -> Result<(), NotFound> {
///         self.fields.remove(name).map(|_| ()).ok_or(NotFound)
///     }
///
///     fn invoke_function(&self, name: &str, value: f64) -> Result<f64, NotFound> {
///         match name {
///             "double" => Ok(value * 2.0),
///             _ => Err(NotFound),
///         }
///     }
/// }
///
/// let mut session = Session::with_store(HostStore::new(Form::default()));
/// assert_eq!(session.respond("r = double(4)"), "r = 8");
/// assert_eq!(session.store().host().fields["r"], 8.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HostStore<H> {
    host: H,
}

impl<H: Host> HostStore<H> {
    /// Wraps `host`.
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// The wrapped host.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// The wrapped host, mutably.
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Unwraps the host.
    pub fn into_inner(self) -> H {
        self.host
    }
}

impl<H: Host> VariableStore for HostStore<H> {
    fn get(&self, name: &Name) -> EvalResult<f64> {
        self.host
            .get_variable(name.as_str())
            .map_err(|NotFound| RuntimeError::undefined_variable(name.as_str()))
    }

    fn set(&mut self, name: &Name, value: f64) {
        self.host.set_variable(name.as_str(), value);
    }

    fn remove(&mut self, name: &Name) -> EvalResult<()> {
        self.host
            .clear_variable(name.as_str())
            .map_err(|NotFound| RuntimeError::undefined_variable(name.as_str()))
    }

    fn invoke_function(&self, name: &Name, argument: f64) -> EvalResult<f64> {
        self.host
            .invoke_function(name.as_str(), argument)
            .map_err(|NotFound| RuntimeError::unknown_function(name.as_str()))
    }
}
