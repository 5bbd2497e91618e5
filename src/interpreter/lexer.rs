use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression grammar.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Float literal tokens, such as `3.14`, `.5` or `2.`.
    /// A literal with more than one decimal point is rejected here.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    #[regex(r"\.[0-9]+", parse_float)]
    #[regex(r"[0-9]*\.[0-9]*\.[0-9.]*", reject_extra_decimal_point)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, `true` and `false`. Any other keyword is a
    /// lexical error.
    #[regex(r"[a-zA-Z]+", parse_keyword)]
    Bool(bool),
    /// `+`
    #[token("+")]
    Plus,
    /// Binary `-`. The lexer emits [`Token::UnaryMinus`] instead when the
    /// minus sign follows an operator, a `(`, or the start of input.
    #[token("-")]
    Minus,
    /// Unary `-`. Never produced by the scanner patterns directly; see
    /// [`tokenize`].
    UnaryMinus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns `true` if this token is a literal (integer, float or boolean).
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Real(_) | Self::Bool(_))
    }

    /// Returns `true` if this token is an operator (unary or binary).
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::Minus
                 | Self::UnaryMinus
                 | Self::Star
                 | Self::Slash
                 | Self::Caret
                 | Self::EqualEqual
                 | Self::BangEqual
                 | Self::Greater
                 | Self::Less
                 | Self::GreaterEqual
                 | Self::LessEqual
                 | Self::And
                 | Self::Or)
    }
}

/// Tokenizes an expression into a sequence of tokens in infix order.
///
/// Scanning proceeds left to right: whitespace is skipped, digits (or a `.`
/// followed by a digit) start a numeric literal, alphabetic characters start
/// a keyword, and two-character operators are matched before single-character
/// ones. A `-` is emitted as [`Token::UnaryMinus`] when the previously
/// emitted token was an operator or `(` (the start of input counts as such),
/// and as binary [`Token::Minus`] otherwise.
///
/// # Errors
/// Returns a [`LexError`] for numeric literals with multiple decimal points
/// or values that cannot be parsed, for keywords other than `true`/`false`,
/// and for characters outside the grammar.
///
/// # Examples
/// ```
/// use evalia::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("-2 + .5").unwrap();
/// assert_eq!(tokens,
///            vec![Token::UnaryMinus, Token::Integer(2), Token::Plus, Token::Real(0.5)]);
///
/// assert!(tokenize("1.2.3").is_err());
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);
    // The start of an expression binds like the position after an operator.
    let mut after_operator_or_lparen = true;

    while let Some(next) = lexer.next() {
        let token = match next {
            Ok(Token::Minus) if after_operator_or_lparen => Token::UnaryMinus,
            Ok(token) => token,
            Err(LexError::UnexpectedCharacter { found }) if found.is_empty() => {
                return Err(LexError::UnexpectedCharacter { found: lexer.slice().to_string() });
            },
            Err(error) => return Err(error),
        };

        after_operator_or_lparen = token.is_operator() || token == Token::LParen;
        tokens.push(token);
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice. Literals
/// too large for a finite 64-bit float are rejected.
fn parse_float(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice()
       .parse()
       .ok()
       .filter(|value: &f64| value.is_finite())
       .ok_or_else(|| LexError::MalformedNumber { literal: lex.slice().to_string() })
}

/// Parses an integer literal from the current token slice. Literals that
/// overflow a 64-bit integer are rejected.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice()
       .parse()
       .map_err(|_| LexError::MalformedNumber { literal: lex.slice().to_string() })
}

/// Rejects numeric literals that contain a second decimal point.
fn reject_extra_decimal_point(_lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    Err(LexError::MultipleDecimalPoints)
}

/// Matches an alphabetic keyword against the boolean literals.
fn parse_keyword(lex: &logos::Lexer<Token>) -> Result<bool, LexError> {
    match lex.slice() {
        "true" => Ok(true),
        "false" => Ok(false),
        keyword => Err(LexError::UnknownKeyword { keyword: keyword.to_string() }),
    }
}
