use crate::{
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::builtin},
};

/// Type alias for builtin function handlers.
///
/// Every builtin takes exactly one evaluated argument.
type BuiltinFn = fn(f64) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and a function pointer implementing the
/// builtin. The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"  => builtin::sin,
    "cos"  => builtin::cos,
    "tan"  => builtin::tan,
    "sqrt" => builtin::sqrt,
}

/// Applies the builtin called `name` to `argument`.
///
/// Angles are in radians; no degree conversion happens anywhere.
///
/// # Errors
/// `RuntimeError::UnknownFunction` carrying `name` when it is not in the
/// table.
///
/// # Example
/// ```
/// use linecalc::{error::RuntimeError, interpreter::evaluator::function::call_builtin};
///
/// assert_eq!(call_builtin("cos", 0.0), Ok(1.0));
/// assert_eq!(call_builtin("foo", 1.0),
///            Err(RuntimeError::UnknownFunction { name: "foo".into() }));
/// ```
pub fn call_builtin(name: &str, argument: f64) -> EvalResult<f64> {
    BUILTIN_TABLE.iter()
                 .find(|b| b.name == name)
                 .map(|builtin| (builtin.func)(argument))
                 .ok_or_else(|| RuntimeError::unknown_function(name))
}
