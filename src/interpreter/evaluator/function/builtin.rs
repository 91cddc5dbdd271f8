/// Wraps an `f64` method as a one-argument builtin.
///
/// The generated function applies the method directly, so IEEE edge cases
/// pass through unchanged: `tan` near odd multiples of pi/2 grows without
/// bound, and `sqrt` of a negative number is NaN rather than an error.
///
/// # Example
/// ```
/// use linecalc::interpreter::evaluator::function::builtin::{sin, sqrt};
///
/// assert_eq!(sin(0.0), 0.0);
/// assert_eq!(sqrt(9.0), 3.0);
/// assert!(sqrt(-4.0).is_nan());
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $fname(x: f64) -> f64 {
            x.$real_fn()
        }
    };
}

real_builtin!(sin, sin, "Sine of an angle in radians.");
real_builtin!(cos, cos, "Cosine of an angle in radians.");
real_builtin!(tan, tan, "Tangent of an angle in radians.");
real_builtin!(sqrt, sqrt, "Square root; NaN for negative input.");
