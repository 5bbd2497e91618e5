use crate::interpreter::value::Value;

#[derive(Debug, Clone, PartialEq)]
/// Represents a mismatch between an operand's type and what an operator
/// requires.
pub enum TypeError {
    /// A numeric operand was required, but a boolean was found.
    ExpectedNumber {
        /// The boolean value that was found instead.
        found: Value,
    },
    /// A boolean operand was required, but a number was found.
    ExpectedBoolean {
        /// The numeric value that was found instead.
        found: Value,
    },
    /// Equality was applied to operands of different types.
    ComparisonMismatch,
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedNumber { found } => {
                write!(f, "Type error: Expected number, got boolean '{found}'")
            },

            Self::ExpectedBoolean { found } => {
                write!(f, "Type error: Expected boolean, got number '{found}'")
            },

            Self::ComparisonMismatch => write!(f, "Type error: type mismatch in comparison"),
        }
    }
}

impl std::error::Error for TypeError {}
