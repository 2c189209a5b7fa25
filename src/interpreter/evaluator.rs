/// Core evaluation logic.
///
/// Contains the `Expression` type, the operand stack machine that runs a
/// postfix sequence, and the evaluator's result type.
pub mod core;

/// Function evaluation.
///
/// Handles prefix and trigonometric functions: the lookup tables and the
/// degree/radian conversions.
pub mod function;
