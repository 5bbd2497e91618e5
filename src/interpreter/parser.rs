use crate::{error::SyntaxError, interpreter::lexer::Token};

/// Returns the binding strength of an operator token.
///
/// Higher values bind tighter. Literals and parentheses have no precedence
/// and return 0.
#[must_use]
pub const fn precedence(token: &Token) -> u8 {
    match token {
        Token::Or => 1,
        Token::And => 2,
        Token::EqualEqual | Token::BangEqual => 3,
        Token::Greater | Token::Less | Token::GreaterEqual | Token::LessEqual => 4,
        Token::Plus | Token::Minus => 5,
        Token::Star | Token::Slash => 6,
        Token::UnaryMinus => 7,
        Token::Caret => 8,
        _ => 0,
    }
}

/// Returns `true` for right-associative operators.
///
/// Exponentiation and unary negation group right-to-left, so `2 ^ 3 ^ 2`
/// means `2 ^ (3 ^ 2)`. All other operators group left-to-right.
#[must_use]
pub const fn is_right_associative(token: &Token) -> bool {
    matches!(token, Token::Caret | Token::UnaryMinus)
}

/// Decides whether the operator on top of the stack must be emitted before
/// pushing the incoming operator.
///
/// An operator is popped if it binds tighter than the incoming one, or
/// equally tight when the incoming operator is left-associative. A `(` on top
/// always stops the popping, since it delimits the current subexpression.
fn should_pop_before(top: &Token, incoming: &Token) -> bool {
    if *top == Token::LParen {
        return false;
    }

    if is_right_associative(incoming) {
        precedence(top) > precedence(incoming)
    } else {
        precedence(top) >= precedence(incoming)
    }
}

/// Converts a token sequence from infix to postfix (reverse Polish) order.
///
/// This is the shunting-yard algorithm: literals pass straight through to the
/// output, `(` is pushed onto an operator stack, `)` pops operators into the
/// output until its matching `(` (which is discarded), and each operator
/// first pops every stacked operator that must be applied before it. After
/// all input is consumed, the remaining stacked operators are drained into
/// the output.
///
/// # Errors
/// Returns [`SyntaxError::MismatchedParentheses`] if a `)` finds no matching
/// `(` on the stack, or if a parenthesis is left on the stack after all input
/// is consumed.
///
/// # Examples
/// ```
/// use evalia::interpreter::{lexer::tokenize, parser::to_postfix};
///
/// let infix = tokenize("1 + 2 * 3").unwrap();
/// let postfix = to_postfix(infix).unwrap();
///
/// // 1 2 3 * +
/// assert_eq!(postfix, tokenize("1 2 3 * +").unwrap());
///
/// assert!(to_postfix(tokenize("(1 + 2").unwrap()).is_err());
/// ```
pub fn to_postfix(infix: Vec<Token>) -> Result<Vec<Token>, SyntaxError> {
    let mut postfix = Vec::with_capacity(infix.len());
    let mut operator_stack: Vec<Token> = Vec::new();

    for token in infix {
        if token.is_literal() {
            postfix.push(token);
        } else if token == Token::LParen {
            operator_stack.push(token);
        } else if token == Token::RParen {
            // If no left parenthesis turns up while popping, the input had a
            // mismatched parenthesis.
            let mut found_left_paren = false;
            while let Some(top) = operator_stack.pop() {
                if top == Token::LParen {
                    found_left_paren = true;
                    break;
                }

                postfix.push(top);
            }

            if !found_left_paren {
                return Err(SyntaxError::MismatchedParentheses);
            }
        } else {
            while operator_stack.last().is_some_and(|top| should_pop_before(top, &token)) {
                if let Some(top) = operator_stack.pop() {
                    postfix.push(top);
                }
            }

            operator_stack.push(token);
        }
    }

    // Drain the remaining operators. Any parenthesis still on the stack means
    // the input had a mismatched parenthesis.
    while let Some(top) = operator_stack.pop() {
        if top == Token::LParen || top == Token::RParen {
            return Err(SyntaxError::MismatchedParentheses);
        }

        postfix.push(top);
    }

    Ok(postfix)
}
