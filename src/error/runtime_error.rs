use crate::error::{MathError, SyntaxError, TypeError};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
///
/// Evaluation can fail in three independent ways: an operand can have the
/// wrong type, an operation can be mathematically undefined, or the token
/// sequence can be structurally invalid (wrong operand counts). This enum
/// wraps the three families so the evaluator has a single error channel while
/// callers can still match on the kind.
pub enum RuntimeError {
    /// An operand's type did not match what an operator requires.
    Type(TypeError),
    /// A type-correct operation was mathematically undefined.
    Math(MathError),
    /// The token sequence had a structural defect.
    Syntax(SyntaxError),
}

impl From<TypeError> for RuntimeError {
    fn from(error: TypeError) -> Self {
        Self::Type(error)
    }
}

impl From<MathError> for RuntimeError {
    fn from(error: MathError) -> Self {
        Self::Math(error)
    }
}

impl From<SyntaxError> for RuntimeError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Type(error) => error.fmt(f),
            Self::Math(error) => error.fmt(f),
            Self::Syntax(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Type(error) => Some(error),
            Self::Math(error) => Some(error),
            Self::Syntax(error) => Some(error),
        }
    }
}
