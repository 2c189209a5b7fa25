use std::{collections::HashMap, str::FromStr};

use crate::{
    error::{EvalError, ParseError},
    interpreter::{
        converter::{ParseResult, to_postfix},
        evaluator::function::core::{apply_function, apply_trigonometry},
        lexer::extract,
        token::{Category, Lexeme, Token},
    },
    util::num::{finite_checked, parse_number},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// A parsed expression, stored in postfix order.
///
/// An `Expression` is built once from its source text and never changes
/// afterwards. Evaluation only reads the postfix sequence and keeps its
/// operand stack local, so one expression can be evaluated any number of
/// times, against different variables, from several threads at once.
///
/// ## Usage
///
/// ```
/// use std::collections::HashMap;
///
/// use rpncalc::interpreter::evaluator::core::Expression;
///
/// let expression = Expression::new("x+1").unwrap();
/// assert_eq!(expression.to_string(), "x 1 +");
///
/// let mut variables = HashMap::new();
/// variables.insert("x".to_string(), 4.0);
/// assert_eq!(expression.evaluate(&variables).unwrap(), 5.0);
///
/// variables.insert("x".to_string(), -1.0);
/// assert_eq!(expression.evaluate(&variables).unwrap(), 0.0);
///
/// assert!(expression.evaluate(&HashMap::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    postfix: Vec<Token>,
}

impl Expression {
    /// Tokenizes `source` and converts it into postfix order.
    ///
    /// # Errors
    /// - `UnbalancedBrackets` if the brackets do not pair up.
    /// - `UnexpectedOperatorPosition` if `*`, `/` or `^` stands where an
    ///   operand was expected.
    pub fn new(source: &str) -> ParseResult<Self> {
        let expression = Self { postfix: to_postfix(extract(source))? };
        log::debug!("parsed '{source}' into '{expression}'");
        Ok(expression)
    }

    /// The postfix sequence, in evaluation order.
    #[must_use]
    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    /// Runs the postfix sequence on an operand stack.
    ///
    /// Numbers and variables push a value; operators pop two operands and
    /// functions pop one, pushing their result. Every pushed value must be a
    /// finite number.
    ///
    /// # Parameters
    /// - `variables`: Values of the variables the expression refers to. It is
    ///   only read.
    ///
    /// # Returns
    /// The single value left on the stack.
    ///
    /// # Errors
    /// - `UndeclaredVariable` if a variable is missing from `variables`.
    /// - `StackUnderflow` if an operator or function lacks operands.
    /// - `InvalidNumericResult` if any step yields `NaN` or an infinity.
    /// - `EmptyExpression` if there is nothing to evaluate.
    /// - `UnreducedStack` if more than one value remains at the end.
    pub fn evaluate(&self, variables: &HashMap<String, f64>) -> EvalResult<f64> {
        let mut stack = Vec::with_capacity(self.postfix.len());

        for token in &self.postfix {
            let value = Self::eval_token(token, &mut stack, variables)?;
            let value = finite_checked(value, &token.to_string())?;
            log::trace!("{token} -> {value}");
            stack.push(value);
        }

        match stack.as_slice() {
            [] => Err(EvalError::EmptyExpression),
            [value] => Ok(*value),
            values => Err(EvalError::UnreducedStack { remaining: values.len() }),
        }
    }

    /// Computes the value a single token pushes, popping its operands.
    fn eval_token(token: &Token,
                  stack: &mut Vec<f64>,
                  variables: &HashMap<String, f64>)
                  -> EvalResult<f64> {
        let text = match token.lexeme() {
            Lexeme::Literal(value) => return Ok(*value),
            Lexeme::Text(text) => text.as_str(),
        };

        match token.category() {
            Category::Number => {
                parse_number(text).ok_or_else(|| EvalError::UnexpectedToken { token: text.to_string() })
            },
            Category::Variable => {
                variables.get(text)
                         .copied()
                         .ok_or_else(|| EvalError::UndeclaredVariable { name: text.to_string() })
            },
            Category::Operation => {
                let [left, right] = pop_operands::<2>(stack, text)?;
                eval_operation(text, left, right)
            },
            Category::Function => {
                let [x] = pop_operands::<1>(stack, text)?;
                apply_function(text, x)
            },
            Category::Trigonometry => {
                let [x] = pop_operands::<1>(stack, text)?;
                apply_trigonometry(text, x)
            },
            Category::Whitespace | Category::Bracket => {
                Err(EvalError::UnexpectedToken { token: text.to_string() })
            },
        }
    }
}

/// Applies a binary operator.
fn eval_operation(operator: &str, left: f64, right: f64) -> EvalResult<f64> {
    match operator {
        "+" => Ok(left + right),
        "-" => Ok(left - right),
        "*" => Ok(left * right),
        "/" => Ok(left / right),
        "^" => Ok(left.powf(right)),
        _ => Err(EvalError::UnexpectedToken { token: operator.to_string() }),
    }
}

/// Pops the top `N` values, returned in push order.
fn pop_operands<const N: usize>(stack: &mut Vec<f64>, token: &str) -> EvalResult<[f64; N]> {
    let Some(start) = stack.len().checked_sub(N) else {
        return Err(EvalError::StackUnderflow { token:    token.to_string(),
                                               required: N,
                                               found:    stack.len(), });
    };

    let mut operands = [0.0; N];
    operands.copy_from_slice(&stack[start..]);
    stack.truncate(start);
    Ok(operands)
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.postfix.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
