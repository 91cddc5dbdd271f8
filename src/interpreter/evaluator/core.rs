use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{evaluator::binary::eval_binary, store::VariableStore},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression against a variable store.
///
/// This is the main entry point for expression evaluation. The evaluator
/// dispatches on the expression variant:
/// - literals evaluate to themselves,
/// - variables are read through [`VariableStore::get`],
/// - negation negates its operand,
/// - binary operations evaluate left before right, then apply the operator,
/// - function calls evaluate their argument, then go through
///   [`VariableStore::invoke_function`].
///
/// Evaluation is pure: it never writes to the store, and the same tree over an
/// unchanged store always yields the same bits.
///
/// # Errors
/// `UndefinedVariable`, `UnknownFunction` or `DivisionByZero`.
///
/// # Example
/// ```
/// use linecalc::{
///     ast::{BinaryOperator, Expr, Name},
///     interpreter::{evaluator::eval, store::MemoryStore},
/// };
///
/// let store = MemoryStore::new();
/// let expr = Expr::binary(Expr::Variable(Name::new("pi").unwrap()),
///                         BinaryOperator::Mul,
///                         Expr::Number(2.0));
///
/// assert_eq!(eval(&expr, &store), Ok(6.28318));
/// ```
pub fn eval<S>(expr: &Expr, store: &S) -> EvalResult<f64>
    where S: VariableStore + ?Sized
{
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Variable(name) => store.get(name),
        Expr::Negate(operand) => Ok(-eval(operand, store)?),
        Expr::BinaryOp { left, op, right } => {
            let left = eval(left, store)?;
            let right = eval(right, store)?;
            eval_binary(*op, left, right)
        },
        Expr::FunctionCall { name, argument } => {
            let argument = eval(argument, store)?;
            store.invoke_function(name, argument)
        },
    }
}
