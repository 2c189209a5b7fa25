use std::collections::HashMap;

use crate::{
    error::ParseError,
    interpreter::{
        classifier::priority,
        token::{Category, Token},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Working state of one infix to postfix conversion.
///
/// `pending` holds at most one deferred token per nesting level: a prefix
/// function, a trigonometric function or the minus of a unary negation. The
/// deferred token is emitted as soon as the operand at its level completes.
/// A second deferred token at an occupied level replaces the first one.
struct Converter {
    output:    Vec<Token>,
    stack:     Vec<Token>,
    pending:   HashMap<usize, Token>,
    level:     usize,
    /// `true` while the next token would start a new operand: at the start,
    /// after `(` and after a binary operator.
    beginning: bool,
}

impl Converter {
    fn new(capacity: usize) -> Self {
        Self { output:    Vec::with_capacity(capacity),
               stack:     Vec::new(),
               pending:   HashMap::new(),
               level:     0,
               beginning: true, }
    }

    fn push_token(&mut self, token: Token) -> ParseResult<()> {
        match token.category() {
            Category::Whitespace => {},
            Category::Bracket => {
                if token.is_bracket("(") {
                    self.open_bracket(token);
                } else {
                    self.close_bracket()?;
                    self.complete_operand();
                }
            },
            Category::Operation => self.push_operation(token)?,
            Category::Function | Category::Trigonometry => {
                log::trace!("deferring {token} at level {}", self.level);
                self.pending.insert(self.level, token);
            },
            Category::Number | Category::Variable => {
                self.output.push(token);
                self.beginning = false;
                self.complete_operand();
            },
        }
        Ok(())
    }

    fn open_bracket(&mut self, token: Token) {
        self.stack.push(token);
        self.beginning = true;
        self.level += 1;
    }

    /// Emits everything above the matching open bracket and drops the bracket.
    fn close_bracket(&mut self) -> ParseResult<()> {
        while let Some(top) = self.stack.pop() {
            if top.is_bracket("(") {
                self.beginning = false;
                self.level = self.level.checked_sub(1).ok_or(ParseError::UnbalancedBrackets)?;
                return Ok(());
            }
            self.output.push(top);
        }
        Err(ParseError::UnbalancedBrackets)
    }

    fn push_operation(&mut self, token: Token) -> ParseResult<()> {
        let operator = token.text().unwrap_or_default();

        if self.beginning {
            return match operator {
                "-" => {
                    self.output.push(Token::literal(0.0));
                    log::trace!("unary minus deferred at level {}", self.level);
                    self.pending.insert(self.level, token);
                    Ok(())
                },
                "+" => Ok(()),
                _ => Err(ParseError::UnexpectedOperatorPosition { operator: operator.to_string() }),
            };
        }

        let p1 = priority(operator);
        while let Some(top) = self.stack.pop_if(|top| p1 <= top.text().map_or(0, priority)) {
            self.output.push(top);
        }
        self.stack.push(token);
        self.beginning = true;
        Ok(())
    }

    /// Emits the token deferred at the current level, if any.
    fn complete_operand(&mut self) {
        if let Some(deferred) = self.pending.remove(&self.level) {
            self.output.push(deferred);
        }
    }

    fn finish(mut self) -> ParseResult<Vec<Token>> {
        if self.level != 0 {
            return Err(ParseError::UnbalancedBrackets);
        }
        while let Some(top) = self.stack.pop() {
            self.output.push(top);
        }
        Ok(self.output)
    }
}

/// Converts an infix token sequence into postfix (Reverse Polish) order.
///
/// Binary operators are ordered by priority; operators of equal priority
/// fold to the left, `^` included. A `-` where an operand is expected is
/// rewritten as `0 <operand> -`, a `+` in the same place is dropped, and
/// functions are emitted directly after their operand.
///
/// # Parameters
/// - `tokens`: Classified tokens in source order.
///
/// # Returns
/// The postfix sequence, in evaluation order.
///
/// # Errors
/// - `UnbalancedBrackets` if a `)` has no matching `(` or a `(` is never
///   closed.
/// - `UnexpectedOperatorPosition` if `*`, `/` or `^` appears where an operand
///   was expected.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{converter::to_postfix, lexer::extract};
///
/// let postfix = to_postfix(extract("10*(-6+4^2)")).unwrap();
/// let text: Vec<String> = postfix.iter().map(ToString::to_string).collect();
///
/// assert_eq!(text, ["10", "0", "6", "-", "4", "2", "^", "+", "*"]);
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> ParseResult<Vec<Token>> {
    let mut converter = Converter::new(tokens.len());

    for token in tokens {
        converter.push_token(token)?;
    }

    converter.finish()
}
