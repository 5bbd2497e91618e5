use crate::interpreter::{evaluator::core::EvalResult, value::Value};

/// Evaluates unary negation on a value.
///
/// The operand must be a number; negating a boolean is a type error.
///
/// # Example
/// ```
/// use evalia::interpreter::{evaluator::unary::eval_negate, value::Value};
///
/// let result = eval_negate(&Value::Number(5.0)).unwrap();
/// assert_eq!(result, Value::Number(-5.0));
///
/// assert!(eval_negate(&Value::Boolean(true)).is_err());
/// ```
pub fn eval_negate(operand: &Value) -> EvalResult<Value> {
    Ok(Value::Number(-operand.as_number()?))
}
