use logos::Logos;

use crate::interpreter::token::Category;

/// The shapes a complete lexeme may take.
///
/// Every shape is tried against the whole lexeme. When several shapes span
/// it, the one with the highest priority wins, which yields the order
/// Number, Function, Trigonometry, Variable, Operation, Bracket.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Shape {
    /// `12`, `1.5`, `.5`, `2e10`, `6.02E+23`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", priority = 10)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", priority = 10)]
    Number,
    #[token("sqrt", priority = 9)]
    #[token("abs", priority = 9)]
    #[token("exp", priority = 9)]
    #[token("ln", priority = 9)]
    #[token("log2", priority = 9)]
    #[token("log10", priority = 9)]
    #[token("log", priority = 9)]
    Function,
    /// Optional `a` for the inverse, optional `h` for the hyperbolic variant
    /// and optional `r` when the angle is already in radians.
    #[regex(r"a?(sin|cos|tan|cot|tg|ctg)h?r?", priority = 8)]
    Trigonometry,
    #[regex(r"[a-zA-Z0-9']+(_[a-zA-Z0-9']+)?", priority = 7)]
    Variable,
    #[regex(r"[-+*/^]", priority = 6)]
    Operation,
    #[regex(r"[()]", priority = 6)]
    Bracket,
}

impl From<Shape> for Category {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Number => Self::Number,
            Shape::Function => Self::Function,
            Shape::Trigonometry => Self::Trigonometry,
            Shape::Variable => Self::Variable,
            Shape::Operation => Self::Operation,
            Shape::Bracket => Self::Bracket,
        }
    }
}

/// Decides which category a lexeme belongs to.
///
/// The lexeme must be matched in full by a single shape; partial matches and
/// anything unrecognized fall back to `Category::Whitespace`.
///
/// # Parameters
/// - `lexeme`: The candidate text.
///
/// # Returns
/// The category of the lexeme.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{classifier::classify, token::Category};
///
/// assert_eq!(classify("1.5e3"), Category::Number);
/// assert_eq!(classify("log10"), Category::Function);
/// assert_eq!(classify("asinr"), Category::Trigonometry);
/// assert_eq!(classify("x_1"), Category::Variable);
/// assert_eq!(classify("^"), Category::Operation);
/// assert_eq!(classify(")"), Category::Bracket);
/// assert_eq!(classify("?"), Category::Whitespace);
/// ```
#[must_use]
pub fn classify(lexeme: &str) -> Category {
    let mut lexer = Shape::lexer(lexeme);

    match lexer.next() {
        Some(Ok(shape)) if lexer.span().len() == lexeme.len() => shape.into(),
        _ => Category::Whitespace,
    }
}

/// Returns the binding priority of an operator.
///
/// `+` and `-` bind weakest, `^` strongest. Anything that is not an operator,
/// including an open bracket on the converter stack, has priority `0`.
///
/// # Example
/// ```
/// use rpncalc::interpreter::classifier::priority;
///
/// assert_eq!(priority("+"), 1);
/// assert_eq!(priority("/"), 2);
/// assert_eq!(priority("^"), 3);
/// assert_eq!(priority("("), 0);
/// ```
#[must_use]
pub fn priority(operator: &str) -> u8 {
    match operator {
        "+" | "-" => 1,
        "*" | "/" => 2,
        "^" => 3,
        _ => 0,
    }
}
