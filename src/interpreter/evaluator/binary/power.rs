use crate::interpreter::{evaluator::core::Evaluator, value::Value};

impl Evaluator {
    /// Evaluates an exponentiation.
    ///
    /// An integer raised to a non-negative integer uses checked arithmetic and
    /// stays an integer. Overflow, negative integer exponents and float
    /// operands are computed in floating-point form with `powf`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::{evaluator::core::Evaluator, value::Value};
    ///
    /// assert_eq!(Evaluator::eval_pow(Value::Integer(2), Value::Integer(10)),
    ///            Value::Integer(1024));
    /// assert_eq!(Evaluator::eval_pow(Value::Integer(2), Value::Integer(-1)),
    ///            Value::Float(0.5));
    /// assert_eq!(Evaluator::eval_pow(Value::Float(9.0), Value::Float(0.5)),
    ///            Value::Float(3.0));
    /// ```
    #[must_use]
    pub fn eval_pow(base: Value, exponent: Value) -> Value {
        let checked = match (base, exponent) {
            (Value::Integer(b), Value::Integer(e)) => {
                u32::try_from(e).ok().and_then(|e| b.checked_pow(e))
            },
            _ => None,
        };

        checked.map_or_else(|| Value::Float(base.as_float().powf(exponent.as_float())),
                            Value::Integer)
    }
}
