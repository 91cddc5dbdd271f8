use crate::{
    ast::Name,
    interpreter::evaluator::{core::EvalResult, function::call_builtin},
};

/// In-memory variable storage.
pub mod memory;

/// Adapter for stores owned by a host application.
///
/// Lets a presentation layer keep variables in its own medium while the
/// engine reads and writes them through a narrow capability trait.
pub mod host;

pub use host::{Host, HostStore, NotFound};
pub use memory::MemoryStore;

/// Constants every session starts with.
pub const DEFAULT_CONSTANTS: &[(&str, f64)] = &[("pi", 3.14159)];

/// The mutable mapping from names to values that expressions resolve against.
///
/// Implementations hold only validated [`Name`]s. Mutation happens solely
/// through assignment and deletion execution.
pub trait VariableStore {
    /// Looks up `name`.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` when `name` is not bound.
    fn get(&self, name: &Name) -> EvalResult<f64>;

    /// Binds `name` to `value`, silently replacing any previous binding.
    fn set(&mut self, name: &Name, value: f64);

    /// Removes the binding for `name`.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` when `name` is not bound; deleting
    /// a missing variable is never a no-op.
    fn remove(&mut self, name: &Name) -> EvalResult<()>;

    /// Applies the function `name` to `argument`.
    ///
    /// Defaults to the built-in table (`sin`, `cos`, `tan`, `sqrt`).
    ///
    /// # Errors
    /// `RuntimeError::UnknownFunction` when `name` is not a known function.
    fn invoke_function(&self, name: &Name, argument: f64) -> EvalResult<f64> {
        call_builtin(name.as_str(), argument)
    }
}

impl<S: VariableStore + ?Sized> VariableStore for &mut S {
    fn get(&self, name: &Name) -> EvalResult<f64> {
        (**self).get(name)
    }

    fn set(&mut self, name: &Name, value: f64) {
        (**self).set(name, value);
    }

    fn remove(&mut self, name: &Name) -> EvalResult<()> {
        (**self).remove(name)
    }

    fn invoke_function(&self, name: &Name, argument: f64) -> EvalResult<f64> {
        (**self).invoke_function(name, argument)
    }
}

impl<S: VariableStore + ?Sized> VariableStore for Box<S> {
    fn get(&self, name: &Name) -> EvalResult<f64> {
        (**self).get(name)
    }

    fn set(&mut self, name: &Name, value: f64) {
        (**self).set(name, value);
    }

    fn remove(&mut self, name: &Name) -> EvalResult<()> {
        (**self).remove(name)
    }

    fn invoke_function(&self, name: &Name, argument: f64) -> EvalResult<f64> {
        (**self).invoke_function(name, argument)
    }
}
