use crate::error::{EvalError, ParseError};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while processing one input line.
pub enum SessionError {
    /// The line contains more than one `=`.
    TooManyAssignments {
        /// Number of `=` signs found.
        count: usize,
    },
    /// The left-hand side of an assignment is not a variable name.
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// The expression could not be converted.
    Parse(ParseError),
    /// The expression could not be evaluated.
    Eval(EvalError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyAssignments { count } => {
                write!(f, "Input error: Too many '=' ({count}), expected at most one.")
            },
            Self::InvalidName { name } => {
                write!(f, "Input error: '{name}' is not a valid variable name.")
            },
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for SessionError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for SessionError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}
