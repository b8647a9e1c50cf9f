use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates an arithmetic operation that keeps integers integral.
    ///
    /// Two integers are combined with `integer_op`. If that overflows, or if
    /// either operand is a float, both operands are converted to `f64` and
    /// combined with `float_op`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::{evaluator::core::Evaluator, value::Value};
    ///
    /// let sum = Evaluator::eval_scalar_op(Value::Integer(3),
    ///                                     Value::Integer(4),
    ///                                     i64::checked_add,
    ///                                     |a, b| a + b);
    /// assert_eq!(sum, Value::Integer(7));
    ///
    /// let sum = Evaluator::eval_scalar_op(Value::Integer(i64::MAX),
    ///                                     Value::Integer(1),
    ///                                     i64::checked_add,
    ///                                     |a, b| a + b);
    /// assert!(sum.is_float());
    /// ```
    #[must_use]
    pub fn eval_scalar_op(left: Value,
                          right: Value,
                          integer_op: fn(i64, i64) -> Option<i64>,
                          float_op: fn(f64, f64) -> f64)
                          -> Value {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => {
                integer_op(a, b).map_or_else(|| Value::Float(float_op(left.as_float(),
                                                                      right.as_float())),
                                             Value::Integer)
            },
            _ => Value::Float(float_op(left.as_float(), right.as_float())),
        }
    }

    /// Evaluates a division.
    ///
    /// Dividing two integers yields an integer only when the division is
    /// exact; otherwise the quotient is a float. Any float operand makes the
    /// result a float.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] if `right` is exactly zero.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let q = Evaluator::eval_div(Value::Integer(10), Value::Integer(2), 3);
    /// assert_eq!(q, Ok(Value::Integer(5)));
    ///
    /// let q = Evaluator::eval_div(Value::Integer(7), Value::Integer(2), 3);
    /// assert_eq!(q, Ok(Value::Float(3.5)));
    ///
    /// let q = Evaluator::eval_div(Value::Integer(5), Value::Float(0.0), 3);
    /// assert_eq!(q, Err(RuntimeError::DivisionByZero { position: 3 }));
    /// ```
    pub fn eval_div(left: Value, right: Value, position: usize) -> EvalResult<Value> {
        if right.is_zero() {
            return Err(RuntimeError::DivisionByZero { position });
        }

        let quotient = match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => match (a.checked_div(b), a.checked_rem(b)) {
                (Some(q), Some(0)) => Value::Integer(q),
                _ => Value::Float(left.as_float() / right.as_float()),
            },
            _ => Value::Float(left.as_float() / right.as_float()),
        };

        Ok(quotient)
    }
}
