use crate::{
    error::{RuntimeError, SyntaxError},
    interpreter::{
        evaluator::{binary::eval_binary, unary::eval_negate},
        lexer::Token,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix token sequence and returns the resulting value.
///
/// Tokens are processed left to right on a value stack: literals push their
/// value, the unary minus pops one operand and pushes its negation, and every
/// other operator pops the right operand, then the left, and pushes the
/// result. Operand types are checked at each application; nothing is coerced.
/// After all tokens are consumed the stack must hold exactly one value, which
/// is the result.
///
/// # Errors
/// - [`RuntimeError::Syntax`] when an operator finds too few operands, when
///   more than one value remains at the end, or when a parenthesis token
///   appears in the sequence (postfix order has none).
/// - [`RuntimeError::Type`] when an operand's type does not match the
///   operator.
/// - [`RuntimeError::Math`] on division by exactly zero.
///
/// # Example
/// ```
/// use evalia::interpreter::{evaluator::core::evaluate_expression, lexer::tokenize,
///                           parser::to_postfix, value::Value};
///
/// let postfix = to_postfix(tokenize("2 ^ 3 ^ 2").unwrap()).unwrap();
/// let result = evaluate_expression(postfix).unwrap();
///
/// assert_eq!(result, Value::Number(512.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn evaluate_expression(postfix: Vec<Token>) -> EvalResult<Value> {
    let mut value_stack: Vec<Value> = Vec::new();

    for token in postfix {
        match token {
            // Operands go directly onto the stack.
            Token::Integer(n) => value_stack.push(Value::Number(n as f64)),
            Token::Real(r) => value_stack.push(Value::Number(r)),
            Token::Bool(b) => value_stack.push(Value::Boolean(b)),

            Token::UnaryMinus => {
                let Some(operand) = value_stack.pop() else {
                    return Err(SyntaxError::MissingOperand.into());
                };

                value_stack.push(eval_negate(&operand)?);
            },

            // Parentheses never survive infix-to-postfix conversion; one
            // showing up here means the caller bypassed it.
            Token::LParen | Token::RParen => {
                return Err(SyntaxError::MismatchedParentheses.into());
            },

            operator => {
                // The right operand was pushed last.
                let Some(right) = value_stack.pop() else {
                    return Err(SyntaxError::InsufficientOperands.into());
                };
                let Some(left) = value_stack.pop() else {
                    return Err(SyntaxError::InsufficientOperands.into());
                };

                value_stack.push(eval_binary(&operator, &left, &right)?);
            },
        }
    }

    if value_stack.len() != 1 {
        return Err(SyntaxError::TooManyOperands.into());
    }

    value_stack.pop().ok_or_else(|| SyntaxError::TooManyOperands.into())
}
