use std::f64::consts::FRAC_PI_2;

/// Cotangent, `cos(x) / sin(x)`.
///
/// # Example
/// ```
/// use rpncalc::interpreter::evaluator::function::builtin::cot;
///
/// let r = cot(std::f64::consts::FRAC_PI_4);
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn cot(x: f64) -> f64 {
    x.cos() / x.sin()
}

/// Hyperbolic cotangent, `cosh(x) / sinh(x)`.
#[must_use]
pub fn coth(x: f64) -> f64 {
    x.cosh() / x.sinh()
}

/// Inverse cotangent on the principal branch `(0, π)`.
///
/// # Example
/// ```
/// use rpncalc::interpreter::evaluator::function::builtin::acot;
///
/// assert_eq!(acot(0.0), std::f64::consts::FRAC_PI_2);
/// ```
#[must_use]
pub fn acot(x: f64) -> f64 {
    FRAC_PI_2 - x.atan()
}

/// Inverse hyperbolic cotangent, `ln(sqrt((x + 1) / (x - 1)))`.
///
/// Only defined for `|x| > 1`; other inputs yield `NaN` or an infinity.
#[must_use]
pub fn acoth(x: f64) -> f64 {
    ((x + 1.0) / (x - 1.0)).sqrt().ln()
}
