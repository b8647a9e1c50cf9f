/// Parsing errors.
///
/// Defines the errors raised while an expression is split into tokens, before
/// any evaluation takes place.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown operators, missing operands, division by zero and
/// expressions that do not reduce to exactly one value.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
