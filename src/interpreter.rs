/// The token model shared by every stage.
///
/// Declares the seven lexical categories and the immutable `(lexeme,
/// category)` pair that flows from the lexer through the converter into the
/// evaluator.
pub mod token;
/// The classifier decides which category a lexeme belongs to.
///
/// # Responsibilities
/// - Matches a whole lexeme against the category shapes in a fixed order.
/// - Provides operator priorities for the converter.
pub mod classifier;
/// The lexer module tokenizes expressions for further processing.
///
/// The lexer reads the raw expression text and produces a sequence of
/// classified tokens such as numbers, variables, operators, brackets and
/// functions. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Scans the input with an ordered set of patterns.
/// - Skips characters that no pattern accepts.
pub mod lexer;
/// The converter module turns infix tokens into postfix order.
///
/// A stack of pending operators resolves priorities and brackets, while a
/// per-level table of deferred tokens places functions and unary minus
/// directly after their operand.
///
/// # Responsibilities
/// - Orders binary operators by priority, folding equal priorities left.
/// - Rewrites unary minus as a subtraction from zero.
/// - Reports unbalanced brackets and misplaced operators.
pub mod converter;
/// The evaluator module computes the value of a postfix sequence.
///
/// # Responsibilities
/// - Runs the operand stack machine.
/// - Resolves variables against a caller-supplied mapping.
/// - Rejects values that are not finite numbers.
pub mod evaluator;
/// The session module drives line-by-line evaluation.
///
/// A session keeps the variables assigned by earlier lines and decides for
/// each new line whether it is a bare expression or an assignment.
pub mod session;
