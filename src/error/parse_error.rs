#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building the postfix sequence.
pub enum ParseError {
    /// A closing bracket had no matching opening bracket, or an opening
    /// bracket was never closed.
    UnbalancedBrackets,
    /// An operator other than a sign appeared where an operand was expected.
    UnexpectedOperatorPosition {
        /// The offending operator.
        operator: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedBrackets => write!(f, "Parse error: Unbalanced brackets."),
            Self::UnexpectedOperatorPosition { operator } => {
                write!(f, "Parse error: Operator '{operator}' in unexpected position.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
