use std::collections::HashMap;

use crate::{
    error::SessionError,
    interpreter::{evaluator::core::Expression, lexer::extract, token::Category},
};

/// What a processed line produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line was blank.
    Empty,
    /// A bare expression and its value.
    Value {
        expression: Expression,
        value:      f64,
    },
    /// An assignment; `value` is now stored under `name`.
    Assigned {
        name:       String,
        expression: Expression,
        value:      f64,
    },
}

/// Stores the state of a line-oriented calculator session.
///
/// The session owns the variables assigned by earlier lines. Each line is
/// either a bare expression, which is evaluated against those variables, or
/// an assignment `name=expression`, which also stores the result.
///
/// ## Usage
///
/// ```
/// use rpncalc::interpreter::session::{Outcome, Session};
///
/// let mut session = Session::new();
/// session.process_line("r=2").unwrap();
///
/// match session.process_line("r^2*3").unwrap() {
///     Outcome::Value { value, .. } => assert_eq!(value, 12.0),
///     other => panic!("unexpected outcome {other:?}"),
/// }
///
/// assert!(session.process_line("a=b=1").is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Session {
    variables: HashMap<String, f64>,
}

impl Session {
    /// Creates a session with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn variables(&self) -> &HashMap<String, f64> {
        &self.variables
    }

    /// Stores `value` under `name`, replacing any earlier value.
    pub fn set_variable(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Processes one line of input.
    ///
    /// A line without `=` is evaluated as a whole. A line with exactly one
    /// `=` evaluates the right-hand side and stores the result under the
    /// trimmed left-hand side. A failed line leaves the variables untouched.
    ///
    /// # Parameters
    /// - `line`: The input line.
    ///
    /// # Returns
    /// The `Outcome` of the line.
    ///
    /// # Errors
    /// - `TooManyAssignments` if the line holds more than one `=`.
    /// - `InvalidName` if the left-hand side is not a variable name.
    /// - `Parse` or `Eval` if the expression fails.
    pub fn process_line(&mut self, line: &str) -> Result<Outcome, SessionError> {
        log::debug!("processing line '{line}'");

        let parts: Vec<&str> = line.split('=').collect();

        match parts.as_slice() {
            [source] if source.trim().is_empty() => Ok(Outcome::Empty),
            [source] => {
                let expression = Expression::new(source)?;
                let value = expression.evaluate(&self.variables)?;
                Ok(Outcome::Value { expression, value })
            },
            [name, source] => {
                let name = name.trim();
                if !is_assignable(name) {
                    return Err(SessionError::InvalidName { name: name.to_string() });
                }

                let expression = Expression::new(source)?;
                let value = expression.evaluate(&self.variables)?;
                self.set_variable(name, value);
                Ok(Outcome::Assigned { name: name.to_string(),
                                       expression,
                                       value })
            },
            _ => Err(SessionError::TooManyAssignments { count: parts.len() - 1 }),
        }
    }
}

/// Returns `true` if the lexer reads `name` back as that exact variable.
///
/// Names such as `2x`, `sinx` or `logb` look like identifiers but scan as
/// several tokens, so a value stored under them could never be read again.
fn is_assignable(name: &str) -> bool {
    match extract(name).as_slice() {
        [token] => token.category() == Category::Variable && token.text() == Some(name),
        _ => false,
    }
}
