use lazy_static::lazy_static;
use regex::Regex;

use crate::interpreter::token::Token;

/// A scanning pattern, anchored at the current position.
struct Pattern {
    regex:              Regex,
    /// Rejects a match that directly follows a digit, so that a trailing
    /// fragment of a number is never read as a variable.
    forbid_after_digit: bool,
}

impl Pattern {
    fn new(pattern: &str, forbid_after_digit: bool) -> Self {
        let regex = Regex::new(&format!("^(?:{pattern})")).expect("scanner patterns are valid");
        Self { regex,
               forbid_after_digit }
    }

    /// Returns the length of the match at the start of `rest`, if any.
    fn match_len(&self, rest: &str, after_digit: bool) -> Option<usize> {
        if self.forbid_after_digit && after_digit {
            return None;
        }
        self.regex.find(rest).map(|m| m.end()).filter(|&len| len > 0)
    }
}

lazy_static! {
    /// The alternation tried at every position, in this order. Trying
    /// trigonometry before functions and both before variables makes `sin`
    /// a trigonometric function instead of an identifier.
    static ref PATTERNS: [Pattern; 6] = [
        Pattern::new(r"[-+*/^]", false),
        Pattern::new(r"[()]", false),
        Pattern::new(r"a?(?:sin|cos|tan|cot|tg|ctg)h?r?", false),
        Pattern::new(r"sqrt|abs|exp|ln|log2|log10|log", false),
        Pattern::new(r"[0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?", false),
        Pattern::new(r"[a-zA-Z0-9']+(?:_[a-zA-Z0-9']+)?", true),
    ];
}

/// Splits an expression into classified tokens.
///
/// The source is scanned left to right. At each position the patterns are
/// tried in a fixed order and the first one that matches produces a token;
/// characters no pattern accepts are skipped without producing anything.
///
/// # Parameters
/// - `source`: The raw expression text.
///
/// # Returns
/// The tokens in source order. Empty input yields an empty vector.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{lexer::extract, token::Category};
///
/// let tokens = extract("10*(-6+sinx)");
/// let text: Vec<String> = tokens.iter().map(ToString::to_string).collect();
/// assert_eq!(text, ["10", "*", "(", "-", "6", "+", "sin", "x", ")"]);
/// assert_eq!(tokens[6].category(), Category::Trigonometry);
/// assert_eq!(tokens[7].category(), Category::Variable);
/// ```
#[must_use]
pub fn extract(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut position = 0;

    while position < source.len() {
        let rest = &source[position..];
        let after_digit = source[..position].chars()
                                            .next_back()
                                            .is_some_and(|c| c.is_ascii_digit());

        if let Some(len) = PATTERNS.iter()
                                   .find_map(|pattern| pattern.match_len(rest, after_digit))
        {
            let token = Token::new(&rest[..len]);
            log::trace!("extracted {token} as {:?}", token.category());
            tokens.push(token);
            position += len;
        } else {
            position += rest.chars().next().map_or(1, char::len_utf8);
        }
    }

    tokens
}
