/// Parsing errors.
///
/// Defines the errors that can occur while converting an infix token stream
/// into postfix form, such as unbalanced brackets or an operator found where
/// an operand was expected.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while running a postfix
/// sequence on the operand stack: missing variables, stack underflow and
/// values that are not finite numbers.
pub mod eval_error;
/// Session errors.
///
/// Errors raised by the line-oriented driver, wrapping parse and evaluation
/// failures together with malformed assignment lines.
pub mod session_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use session_error::SessionError;
