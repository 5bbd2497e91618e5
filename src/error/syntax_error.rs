#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents structural errors in an expression's token sequence.
pub enum SyntaxError {
    /// A closing parenthesis had no matching `(`, or a parenthesis was left
    /// over after all input was consumed.
    MismatchedParentheses,
    /// A unary operator found no operand on the value stack.
    MissingOperand,
    /// A binary operator found fewer than two operands on the value stack.
    InsufficientOperands,
    /// More than one value remained on the stack after evaluation.
    TooManyOperands,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParentheses => write!(f, "Syntax error: mismatched parentheses"),

            Self::MissingOperand => write!(f, "Invalid expression: missing operand"),

            Self::InsufficientOperands => {
                write!(f, "Invalid expression: insufficient operands")
            },

            Self::TooManyOperands => write!(f, "Syntax error: too many operands"),
        }
    }
}

impl std::error::Error for SyntaxError {}
