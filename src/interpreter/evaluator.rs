/// Binary operator evaluation logic.
///
/// Handles addition, subtraction, multiplication, division and
/// exponentiation, including the promotion rules between integers and floats.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the evaluator itself, the evaluation stack handling and error
/// propagation.
pub mod core;
