/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations: arithmetic, comparisons,
/// and logical operators.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the postfix evaluation engine and its value stack, and the
/// result alias shared by the evaluation routines.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation, the only unary operation.
pub mod unary;
