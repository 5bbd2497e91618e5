/// Lexical errors.
///
/// Defines all error types that can occur while scanning source text into
/// tokens: malformed numeric literals, unknown keywords, and characters that
/// do not belong to the expression grammar.
pub mod lex_error;
/// Arithmetic domain errors.
///
/// Contains errors for operations that are type-correct but mathematically
/// undefined, such as division by zero.
pub mod math_error;
/// The evaluator's combined error type.
///
/// Evaluation of a postfix sequence can fail with a type error, a math error,
/// or a structural syntax error; this module wraps the three into one type so
/// that the evaluator has a single error channel.
pub mod runtime_error;
/// Structural syntax errors.
///
/// Defines errors for expressions whose token structure is invalid:
/// mismatched parentheses and operand/operator arity mismatches detected on
/// the value stack.
pub mod syntax_error;
/// Type errors.
///
/// Contains errors for operands whose type does not match what an operator
/// requires, such as a boolean fed to arithmetic or mixed-type equality.
pub mod type_error;

pub use lex_error::LexError;
pub use math_error::MathError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;
pub use type_error::TypeError;
