#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvalError {
    /// A variable has no entry in the supplied mapping.
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
    },
    /// An operator or function found fewer operands than it consumes.
    StackUnderflow {
        /// The operator or function being applied.
        token:    String,
        /// Number of operands the token consumes.
        required: usize,
        /// Number of operands that were on the stack.
        found:    usize,
    },
    /// A step produced a value that is not a finite number.
    InvalidNumericResult {
        /// The token whose evaluation produced the value.
        token: String,
        /// The offending value.
        value: f64,
    },
    /// A function token names nothing in the function table.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// A token that can never be evaluated, such as a bracket.
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// The postfix sequence holds no tokens at all.
    EmptyExpression,
    /// The stack did not reduce to exactly one value.
    UnreducedStack {
        /// Number of values left on the stack.
        remaining: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndeclaredVariable { name } => {
                write!(f, "Evaluation error: Undeclared variable '{name}'.")
            },
            Self::StackUnderflow { token,
                                   required,
                                   found, } => write!(f,
                                                      "Evaluation error: '{token}' on empty stack. Needs {required} operand(s), but found {found}."),
            Self::InvalidNumericResult { token, value } => write!(f,
                                                                  "Evaluation error: Unexpected value {value} while calculating '{token}'."),
            Self::UnknownFunction { name } => {
                write!(f, "Evaluation error: Unknown function '{name}'.")
            },
            Self::UnexpectedToken { token } => {
                write!(f, "Evaluation error: Unexpected token '{token}'.")
            },
            Self::EmptyExpression => write!(f, "Evaluation error: Expression is empty."),
            Self::UnreducedStack { remaining } => write!(f,
                                                         "Evaluation error: Expression left {remaining} values on the stack instead of one."),
        }
    }
}

impl std::error::Error for EvalError {}
