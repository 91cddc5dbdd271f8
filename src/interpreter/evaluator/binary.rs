use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Evaluates a binary operation between two values.
///
/// `+`, `-` and `*` follow IEEE 754. `^` is `f64::powf`, so fractional and
/// negative exponents may produce NaN or infinity rather than an error.
/// Division is the exception: a divisor equal to zero (either sign) is
/// reported as `DivisionByZero` instead of yielding infinity or NaN.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<f64>` containing the evaluated result.
///
/// # Example
/// ```
/// use linecalc::{
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Pow, 2.0, 10.0), Ok(1024.0));
/// assert_eq!(eval_binary(BinaryOperator::Div, 1.0, 0.0),
///            Err(RuntimeError::DivisionByZero));
/// assert!(eval_binary(BinaryOperator::Pow, -8.0, 0.5).unwrap().is_nan());
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div if right == 0.0 => Err(RuntimeError::DivisionByZero),
        BinaryOperator::Div => Ok(left / right),
        BinaryOperator::Pow => Ok(left.powf(right)),
    }
}
