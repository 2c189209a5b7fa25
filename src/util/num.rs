use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Accepts a value only if it is a finite number.
///
/// Every value pushed onto the evaluation stack passes through here, which
/// turns division by zero, overflow and domain errors such as `sqrt(-1)` into
/// an `InvalidNumericResult` error.
///
/// ## Parameters
/// - `value`: The value to check.
/// - `token`: The token that produced the value, for error reporting.
///
/// ## Returns
/// - `Ok(f64)`: The value, unchanged.
/// - `Err(EvalError::InvalidNumericResult)`: If the value is `NaN` or
///   infinite.
///
/// ## Example
/// ```
/// use rpncalc::{error::EvalError, util::num::finite_checked};
///
/// assert_eq!(finite_checked(2.5, "+").unwrap(), 2.5);
///
/// let err = finite_checked(f64::NAN, "sqrt").unwrap_err();
/// assert!(matches!(err, EvalError::InvalidNumericResult { .. }));
/// ```
pub fn finite_checked(value: f64, token: &str) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::InvalidNumericResult { token: token.to_string(),
                                              value })
    }
}

/// Parses a number lexeme such as `2`, `.5` or `6.02e23`.
///
/// Literals too large for an `f64` parse to an infinity and are rejected
/// later like any other non-finite value.
///
/// ## Example
/// ```
/// use rpncalc::util::num::parse_number;
///
/// assert_eq!(parse_number(".5"), Some(0.5));
/// assert_eq!(parse_number("1e3"), Some(1000.0));
/// assert_eq!(parse_number("x"), None);
/// ```
#[must_use]
pub fn parse_number(lexeme: &str) -> Option<f64> {
    lexeme.parse().ok()
}
