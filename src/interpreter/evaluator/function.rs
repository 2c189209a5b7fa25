/// Function tables and their application.
///
/// Holds the static lookup tables for prefix and trigonometric functions and
/// the degree/radian handling of trigonometric names.
pub mod core;

/// Functions missing from the standard library.
///
/// Cotangent and its inverse and hyperbolic variants.
pub mod builtin;
