use crate::error::TypeError;

/// Represents a runtime value produced by evaluation.
///
/// Exactly two kinds of value exist: numbers and booleans. There is no
/// coercion between them anywhere in the pipeline; an operand of the wrong
/// kind is always a [`TypeError`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point). Integer literals
    /// are widened to this representation when pushed by the evaluator.
    Number(f64),
    /// A boolean value (`true` or `false`).
    /// Produced by boolean literals, comparison operators (`<`, `==`, `!=`,
    /// etc.) and logical operators (`&&`, `||`).
    Boolean(bool),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if it is not
    /// numeric.
    ///
    /// # Example
    /// ```
    /// use evalia::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(10.0).as_number().unwrap(), 10.0);
    /// assert!(Value::Boolean(true).as_number().is_err());
    /// ```
    pub fn as_number(&self) -> Result<f64, TypeError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Boolean(_) => Err(TypeError::ExpectedNumber { found: self.clone() }),
        }
    }

    /// Converts the value to a `bool`, or returns an error if it is not a
    /// boolean.
    ///
    /// # Example
    /// ```
    /// use evalia::interpreter::value::Value;
    ///
    /// assert!(Value::Boolean(true).as_bool().unwrap());
    /// assert!(Value::Number(1.0).as_bool().is_err());
    /// ```
    pub fn as_bool(&self) -> Result<bool, TypeError> {
        match self {
            Self::Boolean(b) => Ok(*b),
            Self::Number(_) => Err(TypeError::ExpectedBoolean { found: self.clone() }),
        }
    }

    /// Returns `true` if the value is a number.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns `true` if the value is a boolean.
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }
}

/// Renders the value for display.
///
/// Numbers use Rust's shortest round-trip formatting for `f64`, so printing
/// a value and re-parsing the text yields the identical number. Booleans
/// render as the literal text `true` or `false`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}
