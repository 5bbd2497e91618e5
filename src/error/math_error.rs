#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents operations that are type-correct but mathematically undefined.
pub enum MathError {
    /// Attempted division where the divisor is exactly zero.
    DivisionByZero,
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Math error: division by zero"),
        }
    }
}

impl std::error::Error for MathError {}
