use evalia::{
    error::{LexError, RuntimeError, SyntaxError},
    eval_expression,
    interpreter::{evaluator::core::evaluate_expression, lexer::tokenize, parser::to_postfix},
    interpreter::value::Value,
};

fn expect_number(source: &str, expected: f64) {
    match eval_expression(source) {
        Ok(Value::Number(n)) => {
            assert!((n - expected).abs() < 1e-12,
                    "Expected {expected} for '{source}', got {n}");
        },
        Ok(other) => panic!("Expected number for '{source}', got {other}"),
        Err(e) => panic!("Evaluation of '{source}' failed: {e}"),
    }
}

fn expect_bool(source: &str, expected: bool) {
    match eval_expression(source) {
        Ok(Value::Boolean(b)) => {
            assert_eq!(b, expected, "Expected {expected} for '{source}', got {b}");
        },
        Ok(other) => panic!("Expected boolean for '{source}', got {other}"),
        Err(e) => panic!("Evaluation of '{source}' failed: {e}"),
    }
}

fn expect_failure(source: &str, message_part: &str) {
    match eval_expression(source) {
        Ok(value) => panic!("Expected '{source}' to fail, got {value}"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(message_part),
                    "Expected error for '{source}' to mention '{message_part}', got '{message}'");
        },
    }
}

#[test]
fn basic_arithmetic() {
    expect_number("1 + 2", 3.0);
    expect_number("5 - 8", -3.0);
    expect_number("2 * 3", 6.0);
    expect_number("8 / 4", 2.0);
    expect_number("2 ^ 3", 8.0);
}

#[test]
fn operator_precedence() {
    expect_number("1 + 2 * 3", 7.0);
    expect_number("(1 + 2) * 3", 9.0);
    expect_number("2 + 3 * 4 ^ 2", 50.0);
    expect_number("10 - 4 - 3", 3.0);
    expect_number("8 / 4 / 2", 1.0);
}

#[test]
fn power_is_right_associative() {
    // 2 ^ (3 ^ 2), not (2 ^ 3) ^ 2.
    expect_number("2 ^ 3 ^ 2", 512.0);
}

#[test]
fn unary_minus() {
    expect_number("-3", -3.0);
    expect_number("--2", 2.0);
    expect_number("-(1 + 2)", -3.0);
    expect_number("1 + -2", -1.0);
    expect_number("1 - -2", 3.0);
    expect_number("-2 * 3", -6.0);
    // Power binds tighter than unary minus.
    expect_number("-2^2", -4.0);
}

#[test]
fn float_literals() {
    expect_number("3.14", 3.14);
    expect_number(".5 + .5", 1.0);
    expect_number("5. / 2", 2.5);
    expect_number("0.1 + 0.2", 0.30000000000000004);
}

#[test]
fn comparisons() {
    expect_bool("3 > 2", true);
    expect_bool("2 < 3", true);
    expect_bool("2 >= 2", true);
    expect_bool("2 <= 1", false);
}

#[test]
fn equality_requires_same_kind() {
    expect_bool("3 == 3", true);
    expect_bool("3 != 3", false);
    expect_bool("true == true", true);
    expect_bool("true != false", true);

    expect_failure("1 == true", "type mismatch in comparison");
    expect_failure("false != 0", "type mismatch in comparison");
}

#[test]
fn logical_operators() {
    expect_bool("true && false", false);
    expect_bool("true && true", true);
    expect_bool("true || false", true);
    expect_bool("false || false", false);
    expect_bool("3 > 2 && 1 < 2", true);
}

#[test]
fn logical_operators_require_booleans() {
    expect_failure("1 && true", "Expected boolean, got number '1'");
    // Both operand types are checked even when the left side alone would
    // decide the result.
    expect_failure("false && 1", "Expected boolean");
    expect_failure("true || 0", "Expected boolean");
}

#[test]
fn arithmetic_requires_numbers() {
    expect_failure("true + 1", "Expected number, got boolean 'true'");
    expect_failure("true > false", "Expected number");
    expect_failure("-true", "Expected number");
}

#[test]
fn division_by_zero() {
    expect_failure("1 / 0", "Math error: division by zero");
    expect_failure("1 / 0.0", "Math error: division by zero");
    expect_failure("1 / (3 - 3)", "Math error: division by zero");
    expect_number("0 / 1", 0.0);
    // The divisor is inspected before the left operand's type.
    expect_failure("true / 0", "Math error: division by zero");
    expect_failure("1 / false", "Expected number");
}

#[test]
fn mismatched_parentheses() {
    expect_failure("(1 + 2", "mismatched parentheses");
    expect_failure(")", "mismatched parentheses");
    expect_failure("(1))", "mismatched parentheses");
    expect_failure("1)", "mismatched parentheses");
}

#[test]
fn lexical_errors() {
    assert_eq!(tokenize("1.2.3"), Err(LexError::MultipleDecimalPoints));
    assert_eq!(tokenize("1 + foo"),
               Err(LexError::UnknownKeyword { keyword: "foo".to_string() }));
    assert!(matches!(tokenize("1 @ 2"), Err(LexError::UnexpectedCharacter { .. })));
    // Overflows a 64-bit integer.
    assert!(matches!(tokenize("99999999999999999999"),
                     Err(LexError::MalformedNumber { .. })));

    expect_failure("truthy", "Unknown keyword: truthy");
    expect_failure("1 # 2", "Unexpected character");
}

#[test]
fn operand_count_errors() {
    let postfix = to_postfix(tokenize("1 +").unwrap()).unwrap();
    assert_eq!(evaluate_expression(postfix),
               Err(RuntimeError::Syntax(SyntaxError::InsufficientOperands)));

    let postfix = to_postfix(tokenize("-").unwrap()).unwrap();
    assert_eq!(evaluate_expression(postfix),
               Err(RuntimeError::Syntax(SyntaxError::MissingOperand)));

    let postfix = to_postfix(tokenize("1 2").unwrap()).unwrap();
    assert_eq!(evaluate_expression(postfix),
               Err(RuntimeError::Syntax(SyntaxError::TooManyOperands)));

    expect_failure("", "too many operands");
}

#[test]
fn pipeline_is_pure() {
    let source = "(1 + 2) * 3 == 9";

    let first = eval_expression(source).unwrap();
    let second = eval_expression(source).unwrap();
    assert_eq!(first, second);

    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}

#[test]
fn failure_does_not_poison_later_calls() {
    expect_failure("1 / 0", "division by zero");
    expect_number("1 / 2", 0.5);
}

#[test]
fn display_round_trips_through_the_lexer() {
    let shown = Value::Number(3.0).to_string();
    assert_eq!(shown, "3");
    assert_eq!(eval_expression(&shown).unwrap(), Value::Number(3.0));

    let shown = Value::Number(0.1).to_string();
    assert_eq!(eval_expression(&shown).unwrap(), Value::Number(0.1));

    assert_eq!(Value::Boolean(true).to_string(), "true");
    assert_eq!(Value::Boolean(false).to_string(), "false");
}
