//! # evalia
//!
//! evalia is a small expression evaluator written in Rust.
//! It evaluates arithmetic and boolean expressions supplied as text,
//! supporting numeric and logical operators, comparisons, parentheses, and
//! unary negation, with strict by-value type checking (numbers vs. booleans)
//! performed during evaluation.
//!
//! Evaluation is a straight-line, three-stage pipeline:
//! 1. The lexer turns raw text into an infix token sequence.
//! 2. The parser converts the infix sequence to postfix (reverse Polish)
//!    order using the shunting-yard algorithm.
//! 3. The evaluator reduces the postfix sequence on a value stack to a single
//!    typed [`Value`](interpreter::value::Value).
//!
//! Every stage is a pure function of its input; no state survives between
//! calls, so a failed expression never affects the next one.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator, lexer, parser, value::Value};

/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while turning source
/// text into a result. It standardizes error reporting and carries detailed
/// information about failures, grouped by the stage and category in which
/// they arise.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches human-readable messages identifying the offending construct.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together lexing, infix-to-postfix conversion, postfix
/// evaluation, and the value representation to provide a complete runtime for
/// expression evaluation. It exposes the individual pipeline stages for
/// callers that want to run them separately.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for each pipeline stage.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;

/// Evaluates a single expression and returns its value.
///
/// This is the top-level entry point. It runs the full pipeline: the source
/// text is tokenized, the token sequence is converted to postfix order, and
/// the postfix sequence is reduced to a single value. The first failure at
/// any stage aborts the pipeline and is returned as a boxed error; its
/// message identifies the offending construct.
///
/// # Errors
/// Returns an error if lexing, conversion, or evaluation fails: malformed
/// literals, unknown keywords, unexpected characters, mismatched parentheses,
/// operand type mismatches, missing or extra operands, or division by zero.
///
/// # Examples
/// ```
/// use evalia::{eval_expression, interpreter::value::Value};
///
/// let result = eval_expression("(1 + 2) * 3").unwrap();
/// assert_eq!(result, Value::Number(9.0));
///
/// let result = eval_expression("3 > 2 && true").unwrap();
/// assert_eq!(result, Value::Boolean(true));
///
/// // Arithmetic on booleans is a type error.
/// assert!(eval_expression("true + 1").is_err());
/// ```
pub fn eval_expression(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let infix = lexer::tokenize(source)?;
    let postfix = parser::to_postfix(infix)?;
    let value = evaluator::core::evaluate_expression(postfix)?;

    Ok(value)
}
