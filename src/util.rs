/// Numeric helpers.
///
/// This module provides the checks and conversions shared by the evaluator:
/// parsing number lexemes and rejecting values that are not finite.
pub mod num;
