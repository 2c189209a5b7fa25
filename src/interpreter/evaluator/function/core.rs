use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, function::builtin},
};

/// Signature shared by every entry of the function tables.
type UnaryFn = fn(f64) -> f64;

/// Defines a static lookup table of unary functions.
///
/// Each entry maps a name to a function pointer. The macro produces:
/// - `$table`, a static slice of `(name, function)` pairs,
/// - `$names`, the public list of names in table order.
macro_rules! unary_functions {
    (
        $table:ident, $names:ident;
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        static $table: &[(&str, UnaryFn)] = &[
            $(
                ($name, $func),
            )*
        ];
        pub const $names: &[&str] = &[
            $($name,)*
        ];
    };
}

unary_functions! {
    FUNCTION_TABLE, FUNCTIONS;
    "sqrt"  => f64::sqrt,
    "abs"   => f64::abs,
    "exp"   => f64::exp,
    "ln"    => f64::ln,
    "log2"  => f64::log2,
    "log10" => f64::log10,
    "log"   => f64::log10,
}

unary_functions! {
    TRIGONOMETRY_TABLE, TRIGONOMETRY;
    "sin"   => f64::sin,
    "sinh"  => f64::sinh,
    "asin"  => f64::asin,
    "asinh" => f64::asinh,
    "cos"   => f64::cos,
    "cosh"  => f64::cosh,
    "acos"  => f64::acos,
    "acosh" => f64::acosh,
    "tan"   => f64::tan,
    "tanh"  => f64::tanh,
    "atan"  => f64::atan,
    "atanh" => f64::atanh,
    "cot"   => builtin::cot,
    "coth"  => builtin::coth,
    "acot"  => builtin::acot,
    "acoth" => builtin::acoth,
    "tg"    => f64::tan,
    "tgh"   => f64::tanh,
    "atg"   => f64::atan,
    "atgh"  => f64::atanh,
    "ctg"   => builtin::cot,
    "ctgh"  => builtin::coth,
    "actg"  => builtin::acot,
    "actgh" => builtin::acoth,
}

fn lookup(table: &[(&str, UnaryFn)], name: &str) -> EvalResult<UnaryFn> {
    table.iter()
         .find(|(entry, _)| *entry == name)
         .map(|(_, func)| *func)
         .ok_or_else(|| EvalError::UnknownFunction { name: name.to_string() })
}

/// Applies a prefix function such as `sqrt` or `log10`.
///
/// # Parameters
/// - `name`: Function name.
/// - `x`: The operand.
///
/// # Returns
/// The raw result. Domain errors show up as `NaN` or an infinity and are
/// rejected by the caller.
///
/// # Example
/// ```
/// use rpncalc::interpreter::evaluator::function::core::apply_function;
///
/// assert_eq!(apply_function("sqrt", 16.0).unwrap(), 4.0);
/// assert_eq!(apply_function("log", 1000.0).unwrap(), 3.0);
/// assert!(apply_function("cbrt", 8.0).is_err());
/// ```
pub fn apply_function(name: &str, x: f64) -> EvalResult<f64> {
    Ok(lookup(FUNCTION_TABLE, name)?(x))
}

/// Applies a trigonometric function, converting angles as the name demands.
///
/// Names have the shape `a?(sin|cos|tan|cot|tg|ctg)h?r?`. Without the
/// trailing `r` angles are in degrees: a direct function converts its
/// argument to radians first, an inverse function (leading `a`) converts its
/// result back to degrees. With `r` both work in radians and the `r` is
/// stripped before the table lookup.
///
/// # Example
/// ```
/// use rpncalc::interpreter::evaluator::function::core::apply_trigonometry;
///
/// assert!((apply_trigonometry("sin", 30.0).unwrap() - 0.5).abs() < 1e-12);
/// assert!((apply_trigonometry("asin", 1.0).unwrap() - 90.0).abs() < 1e-12);
/// assert_eq!(apply_trigonometry("asinr", 1.0).unwrap(), std::f64::consts::FRAC_PI_2);
/// ```
pub fn apply_trigonometry(name: &str, x: f64) -> EvalResult<f64> {
    let (base, radians) = name.strip_suffix('r').map_or((name, false), |base| (base, true));
    let inverse = name.starts_with('a');
    let func = lookup(TRIGONOMETRY_TABLE, base)?;

    Ok(match (inverse, radians) {
        (_, true) => func(x),
        (false, false) => func(x.to_radians()),
        (true, false) => func(x).to_degrees(),
    })
}
