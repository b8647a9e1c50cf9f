/// The evaluator module reduces a token sequence to a single value.
///
/// The evaluator walks the tokens left to right, pushes literals onto a stack,
/// applies operators to the values they pop and checks that exactly one value
/// remains. It is the core execution engine of the crate.
///
/// # Responsibilities
/// - Dispatches operators by arity and restores left/right operand order.
/// - Applies the integer/float promotion rules of every operation.
/// - Reports runtime errors such as division by zero or stack underflow.
pub mod evaluator;
/// The lexer module splits an expression into tokens.
///
/// The input is trimmed and split on single spaces. Each piece is classified
/// as a numeric literal (integer or float) or as an operator symbol.
pub mod lexer;
/// The operation registry.
///
/// Maps every supported symbol to its operation, canonical name and arity.
pub mod operation;
/// The value module defines the numeric values carried on the stack.
///
/// # Responsibilities
/// - Defines the `Value` enum with its integer and float variants.
/// - Provides conversion to `f64` for mixed arithmetic.
pub mod value;
