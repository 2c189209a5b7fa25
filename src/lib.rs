//! # rpncalc
//!
//! rpncalc is an arithmetic expression calculator written in Rust.
//! It tokenizes infix expressions, converts them to Reverse Polish notation
//! and evaluates the result against a set of named variables, with support
//! for unary minus, nested brackets, prefix functions and trigonometry in
//! degrees or radians.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;

use crate::interpreter::evaluator::core::Expression;

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while converting an
/// expression, evaluating it, or processing a line of input. Every error
/// carries the offending token or name for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (converter, evaluator,
///   session).
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together tokens, classification, lexing, conversion to
/// postfix form, evaluation and the line-oriented session.
///
/// # Responsibilities
/// - Coordinates all stages: lexer, converter and evaluator.
/// - Provides entry points for parsing and evaluating expressions.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// General numeric helpers.
///
/// This module provides the number parsing and finiteness checks used by
/// the evaluator.
pub mod util;

/// Parses and evaluates a single expression.
///
/// # Errors
/// Returns an error if the expression cannot be converted or evaluated.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use rpncalc::get_result;
///
/// let value = get_result("2+3*4", &HashMap::new()).unwrap();
/// assert_eq!(value, 14.0);
///
/// // 'x' is not defined
/// assert!(get_result("x + 1", &HashMap::new()).is_err());
/// ```
pub fn get_result(source: &str,
                  variables: &HashMap<String, f64>)
                  -> Result<f64, Box<dyn std::error::Error>> {
    let expression = Expression::new(source)?;
    Ok(expression.evaluate(variables)?)
}
