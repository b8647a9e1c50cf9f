use crate::interpreter::{evaluator::core::Evaluator, operation::UnaryOperator, value::Value};

impl Evaluator {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Sin`: the sine of the operand in radians. Integers are converted to
    ///   floats first; the result is always a float.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::{
    ///     evaluator::core::Evaluator, operation::UnaryOperator, value::Value,
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Sin, Value::Integer(0));
    /// assert_eq!(v, Value::Float(0.0));
    ///
    /// let x = Value::Float(std::f64::consts::FRAC_PI_2);
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Sin, x), Value::Float(1.0));
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: Value) -> Value {
        match op {
            UnaryOperator::Sin => Value::Float(value.as_float().sin()),
        }
    }
}
