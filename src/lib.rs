//! # rpncalc
//!
//! rpncalc evaluates arithmetic expressions written in reverse polish (postfix)
//! notation, such as `3 4 + 2 *`. Symbols are separated by single spaces.
//! Integers stay integers for as long as the arithmetic allows it; division,
//! exponentiation and `sin` produce floats where the result is not integral.

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

use crate::interpreter::{evaluator::core::Evaluator, value::Value};

/// Provides the error types for tokenizing and evaluating.
///
/// Tokenizing can only fail on empty input. Evaluation failures carry the
/// offending symbol and its position where one exists.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Tokenizing, operator registry, values and evaluation.
pub mod interpreter;

/// Evaluates a postfix expression and returns its value.
///
/// This is a shorthand for creating an [`Evaluator`] and calling
/// [`Evaluator::evaluate`] once.
///
/// # Errors
/// Returns an error if the input is empty or if evaluation fails.
///
/// # Examples
/// ```
/// use rpncalc::{get_result, interpreter::value::Value};
///
/// assert_eq!(get_result("3 4 +").unwrap(), Value::Integer(7));
/// assert_eq!(get_result("10 4 /").unwrap(), Value::Float(2.5));
///
/// // Unknown operators are errors.
/// assert!(get_result("3 4 foo").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let evaluator = Evaluator::new(source)?;

    Ok(evaluator.evaluate()?)
}
