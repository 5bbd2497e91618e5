use crate::{
    error::{MathError, TypeError},
    interpreter::{evaluator::core::EvalResult, lexer::Token, value::Value},
};

/// Evaluates a binary operation between two values.
///
/// Dispatches to the arithmetic, comparison, or logical routine based on the
/// operator token. The caller guarantees that `operator` is one of the binary
/// operator tokens; literals, parentheses, and the unary minus are handled
/// before this point.
///
/// # Example
/// ```
/// use evalia::interpreter::{evaluator::binary::eval_binary, lexer::Token, value::Value};
///
/// let left = Value::Number(2.0);
/// let right = Value::Number(3.0);
///
/// let result = eval_binary(&Token::Caret, &left, &right).unwrap();
/// assert_eq!(result, Value::Number(8.0));
/// ```
pub fn eval_binary(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
    match operator {
        Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Caret => {
            eval_arithmetic(operator, left, right)
        },

        Token::EqualEqual | Token::BangEqual => eval_equality(operator, left, right),

        Token::Greater | Token::Less | Token::GreaterEqual | Token::LessEqual => {
            eval_comparison(operator, left, right)
        },

        Token::And | Token::Or => eval_logic(operator, left, right),

        _ => unreachable!("eval_binary called with non-binary token"),
    }
}

/// Evaluates an arithmetic operation on two numeric operands.
///
/// Both operands must be numbers. For division, the right operand's type and
/// the zero check are verified before the left operand's type, so `true / 0`
/// reports division by zero while `1 / false` reports a type error.
/// Exponentiation uses standard real-number semantics (`f64::powf`).
#[allow(clippy::float_cmp)]
fn eval_arithmetic(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
    use Token::{Caret, Minus, Plus, Slash, Star};

    let result = match operator {
        Plus => left.as_number()? + right.as_number()?,
        Minus => left.as_number()? - right.as_number()?,
        Star => left.as_number()? * right.as_number()?,
        Slash => {
            let divisor = right.as_number()?;
            if divisor == 0.0 {
                return Err(MathError::DivisionByZero.into());
            }

            left.as_number()? / divisor
        },
        Caret => left.as_number()?.powf(right.as_number()?),
        _ => unreachable!(),
    };

    Ok(Value::Number(result))
}

/// Evaluates `==` / `!=` on two operands of the same kind.
///
/// Numbers compare to numbers and booleans to booleans; mixing the two kinds
/// is a type error, never a silent `false`.
#[allow(clippy::float_cmp)]
fn eval_equality(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
    let is_equal = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        _ => return Err(TypeError::ComparisonMismatch.into()),
    };

    match operator {
        Token::EqualEqual => Ok(Value::Boolean(is_equal)),
        Token::BangEqual => Ok(Value::Boolean(!is_equal)),
        _ => unreachable!(),
    }
}

/// Evaluates a relational comparison on two numeric operands.
fn eval_comparison(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
    use Token::{Greater, GreaterEqual, Less, LessEqual};

    let result = match operator {
        Greater => left.as_number()? > right.as_number()?,
        Less => left.as_number()? < right.as_number()?,
        GreaterEqual => left.as_number()? >= right.as_number()?,
        LessEqual => left.as_number()? <= right.as_number()?,
        _ => unreachable!(),
    };

    Ok(Value::Boolean(result))
}

/// Evaluates a logical operation on two boolean operands.
///
/// Both operands were already computed by the time the operator token is
/// applied, so `&&` and `||` do not short-circuit.
fn eval_logic(operator: &Token, left: &Value, right: &Value) -> EvalResult<Value> {
    // Check both operand types up front; `1 && true` and `false && 1` are
    // both type errors.
    let left = left.as_bool()?;
    let right = right.as_bool()?;

    let result = match operator {
        Token::And => left && right,
        Token::Or => left || right,
        _ => unreachable!(),
    };

    Ok(Value::Boolean(result))
}
