/// Addition, subtraction, multiplication and division.
pub mod scalar;

/// Exponentiation.
pub mod power;

use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator},
    operation::BinaryOperator,
    value::Value,
};

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// Routes the operator to its handler. `left` is the operand that was
    /// deeper in the stack, `right` the one that was on top.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Token position for error reporting.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::{
    ///     evaluator::core::Evaluator, operation::BinaryOperator, value::Value,
    /// };
    ///
    /// let left = Value::Integer(4);
    /// let right = Value::Integer(2);
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Sub, left, right, 3);
    /// assert_eq!(result.unwrap(), Value::Integer(2));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       position: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        match op {
            Add => Ok(Self::eval_scalar_op(left, right, i64::checked_add, |a, b| a + b)),
            Sub => Ok(Self::eval_scalar_op(left, right, i64::checked_sub, |a, b| a - b)),
            Mul => Ok(Self::eval_scalar_op(left, right, i64::checked_mul, |a, b| a * b)),
            Div => Self::eval_div(left, right, position),
            Pow => Ok(Self::eval_pow(left, right)),
        }
    }
}
