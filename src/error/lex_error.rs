#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// A numeric literal contained more than one decimal point.
    MultipleDecimalPoints,
    /// A numeric literal could not be parsed into a number value.
    MalformedNumber {
        /// The literal text that failed to parse.
        literal: String,
    },
    /// An alphabetic word did not match any known keyword.
    UnknownKeyword {
        /// The word encountered.
        keyword: String,
    },
    /// A character does not belong to the expression grammar.
    UnexpectedCharacter {
        /// The offending input text.
        found: String,
    },
}

impl Default for LexError {
    /// The error produced when no token pattern matches. The lexer fills in
    /// the offending slice before reporting it.
    fn default() -> Self {
        Self::UnexpectedCharacter { found: String::new() }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MultipleDecimalPoints => {
                write!(f, "Invalid number: multiple decimal points")
            },

            Self::MalformedNumber { literal } => write!(f, "Invalid number: {literal}"),

            Self::UnknownKeyword { keyword } => write!(f, "Unknown keyword: {keyword}"),

            Self::UnexpectedCharacter { found } => {
                write!(f, "Unexpected character: '{found}'")
            },
        }
    }
}

impl std::error::Error for LexError {}
