use crate::interpreter::classifier::classify;

/// The lexical category of a token.
///
/// The category is derived purely from the shape of the lexeme, never from
/// its position in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Blanks and any character no other category accepts.
    Whitespace,
    /// Decimal literal with optional fraction and exponent, such as `2.5e-3`.
    Number,
    /// Identifier such as `x`, `speed'` or `v_0`.
    Variable,
    /// One of `+ - * / ^`.
    Operation,
    /// `(` or `)`.
    Bracket,
    /// Prefix function such as `sqrt` or `log10`.
    Function,
    /// Trigonometric function such as `sin`, `acosh` or `tgr`.
    Trigonometry,
}

/// The text of a token.
///
/// Scanned tokens carry the source text. The converter inserts a zero as a
/// pre-typed numeric value when it rewrites a unary minus into a binary
/// subtraction.
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme {
    /// Text taken from the source expression.
    Text(String),
    /// A numeric value that never went through the tokenizer.
    Literal(f64),
}

/// An immutable pair of lexeme and category.
///
/// # Example
/// ```
/// use rpncalc::interpreter::token::{Category, Token};
///
/// let t = Token::new("acosh");
/// assert_eq!(t.category(), Category::Trigonometry);
/// assert_eq!(t.to_string(), "acosh");
///
/// let zero = Token::literal(0.0);
/// assert_eq!(zero.category(), Category::Number);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    lexeme:   Lexeme,
    category: Category,
}

impl Token {
    /// Creates a token from text, classifying it by its shape.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { lexeme:   Lexeme::Text(text.to_string()),
               category: classify(text), }
    }

    /// Creates a number token holding a pre-typed value.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self { lexeme:   Lexeme::Literal(value),
               category: Category::Number, }
    }

    /// The text or literal value of the token.
    #[must_use]
    pub const fn lexeme(&self) -> &Lexeme {
        &self.lexeme
    }

    /// The category the lexeme was classified as.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the source text of the token, or `None` for literals.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.lexeme {
            Lexeme::Text(text) => Some(text),
            Lexeme::Literal(_) => None,
        }
    }

    /// Returns `true` if the token is the given bracket character.
    #[must_use]
    pub fn is_bracket(&self, bracket: &str) -> bool {
        self.category == Category::Bracket && self.text() == Some(bracket)
    }
}

impl std::fmt::Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Literal(value) => write!(f, "{value}"),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
