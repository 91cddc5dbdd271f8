use thiserror::Error;

/// Represents all errors that can occur during evaluation and execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Read or deletion of a name the store does not hold.
    #[error("undefined variable '{name}'")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Call to a name outside the function table.
    #[error("unknown function '{name}'")]
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Division whose divisor evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl RuntimeError {
    /// Shorthand for [`RuntimeError::UndefinedVariable`].
    pub fn undefined_variable(name: impl Into<String>) -> Self {
        Self::UndefinedVariable { name: name.into() }
    }

    /// Shorthand for [`RuntimeError::UnknownFunction`].
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }
}
