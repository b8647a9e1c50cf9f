use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        lexer::{Token, tokenize},
        operation::Operation,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates one postfix expression.
///
/// The expression is tokenized once, when the evaluator is created. The token
/// sequence never changes afterwards; each call to [`Evaluator::evaluate`]
/// starts from an empty stack, so evaluating twice yields the same result.
///
/// ## Usage
///
/// ```
/// use rpncalc::interpreter::{evaluator::core::Evaluator, value::Value};
///
/// let evaluator = Evaluator::new("4 2 -").unwrap();
/// assert_eq!(evaluator.evaluate().unwrap(), Value::Integer(2));
/// assert_eq!(evaluator.evaluate().unwrap(), Value::Integer(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluator {
    /// Tokens paired with their 1-based position in the input.
    tokens: Vec<(Token, usize)>,
}

impl Evaluator {
    /// Creates an evaluator for the given expression.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidInput`] if the input is empty or contains
    /// only whitespace.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{error::ParseError, interpreter::evaluator::core::Evaluator};
    ///
    /// assert!(Evaluator::new("3 4 +").is_ok());
    /// assert_eq!(Evaluator::new("  ").unwrap_err(), ParseError::InvalidInput);
    /// ```
    pub fn new(input: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(input)?;
        tracing::debug!(count = tokens.len(), "tokenized expression");

        Ok(Self { tokens })
    }

    /// The tokens of the expression, with their positions.
    #[must_use]
    pub fn tokens(&self) -> &[(Token, usize)] {
        &self.tokens
    }

    /// Evaluates the expression and returns the single resulting value.
    ///
    /// Literals are pushed onto the stack. An operator pops as many values as
    /// its arity demands; for binary operators the value that was on top of
    /// the stack becomes the right operand. The result is pushed back. Once
    /// every token is consumed exactly one value must remain.
    ///
    /// # Errors
    /// - [`RuntimeError::UnknownOperation`] for a symbol outside the registry.
    /// - [`RuntimeError::StackUnderflow`] if an operator lacks operands.
    /// - [`RuntimeError::DivisionByZero`] if the divisor is exactly zero.
    /// - [`RuntimeError::InvalidExpression`] if the stack does not end with
    ///   exactly one value.
    ///
    /// The first error aborts evaluation.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let result = Evaluator::new("5 1 2 + 4 * + 3 -").unwrap().evaluate();
    /// assert_eq!(result, Ok(Value::Integer(14)));
    ///
    /// let result = Evaluator::new("1 2").unwrap().evaluate();
    /// assert_eq!(result, Err(RuntimeError::InvalidExpression { remaining: 2 }));
    /// ```
    #[tracing::instrument(level = "debug", skip(self), fields(tokens = self.tokens.len()))]
    pub fn evaluate(&self) -> EvalResult<Value> {
        let mut stack = Vec::with_capacity(self.tokens.len());

        for (token, position) in &self.tokens {
            match token {
                Token::Literal(value) => {
                    tracing::trace!(position, %value, "push literal");
                    stack.push(*value);
                },
                Token::Symbol(symbol) => {
                    let op = Operation::from_symbol(symbol).ok_or_else(|| {
                        RuntimeError::UnknownOperation { symbol:   symbol.clone(),
                                                         position: *position, }
                    })?;
                    let value = Self::apply(op, &mut stack, *position)?;
                    tracing::trace!(position, op = op.name(), %value, "push result");
                    stack.push(value);
                },
            }
        }

        match stack.as_slice() {
            [value] => {
                tracing::debug!(%value, kind = %value.kind(), "evaluation finished");
                Ok(*value)
            },
            _ => Err(RuntimeError::InvalidExpression { remaining: stack.len() }),
        }
    }

    /// Pops the operands of `op` off the stack and applies it.
    ///
    /// The stack is left with the operands removed; the caller pushes the
    /// result.
    fn apply(op: Operation, stack: &mut Vec<Value>, position: usize) -> EvalResult<Value> {
        let available = stack.len();
        let underflow = || RuntimeError::StackUnderflow { symbol: op.symbol().to_string(),
                                                          required: op.arity().count(),
                                                          available,
                                                          position };

        match op {
            Operation::Unary(unary) => {
                let operand = stack.pop().ok_or_else(underflow)?;
                Ok(Self::eval_unary(unary, operand))
            },
            Operation::Binary(binary) => {
                let right = stack.pop().ok_or_else(underflow)?;
                let left = stack.pop().ok_or_else(underflow)?;
                Self::eval_binary(binary, left, right, position)
            },
        }
    }
}
