/// The evaluator module reduces postfix token sequences to values.
///
/// The evaluator processes tokens in postfix order on a value stack: literal
/// tokens push their value, operator tokens pop their operands and push the
/// result. Type checking happens here, at the moment each operator is
/// applied.
///
/// # Responsibilities
/// - Evaluates postfix token sequences, performing all supported operations.
/// - Enforces operand types (numbers vs. booleans) with no coercion.
/// - Reports runtime errors such as division by zero or wrong operand counts.
pub mod evaluator;
/// The lexer module tokenizes source text.
///
/// The lexer (tokenizer) reads the raw expression text and produces a stream
/// of tokens, each corresponding to a meaningful element such as a number, a
/// boolean keyword, an operator, or a parenthesis. This is the first stage of
/// the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens in infix order.
/// - Handles numeric and boolean literals and all surface operators.
/// - Distinguishes unary from binary minus based on scan context.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module reorders infix tokens into postfix order.
///
/// The parser consumes the token stream produced by the lexer and emits the
/// same tokens in postfix (reverse Polish) order using the shunting-yard
/// algorithm, encoding precedence and associativity into token position so
/// the evaluator needs no lookahead.
///
/// # Responsibilities
/// - Converts infix token sequences to postfix token sequences.
/// - Applies the operator precedence and associativity rules.
/// - Detects mismatched parentheses, reporting errors on the first violation.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types produced by evaluation: 64-bit
/// floating-point numbers and booleans. It provides checked accessors used by
/// the evaluator's type checks and the display formatting used to print
/// results.
///
/// # Responsibilities
/// - Defines the `Value` enum and its two variants.
/// - Implements checked conversion to numbers and booleans.
/// - Renders numbers with round-trip precision and booleans as `true`/`false`.
pub mod value;
