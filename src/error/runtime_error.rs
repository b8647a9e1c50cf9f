#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Positions are 1-based indices into the token sequence.
pub enum RuntimeError {
    /// A token is neither a numeric literal nor a known operator.
    UnknownOperation {
        /// The offending symbol.
        symbol:   String,
        /// The position of the symbol.
        position: usize,
    },
    /// An operator was applied with fewer operands than its arity.
    StackUnderflow {
        /// The operator symbol.
        symbol:    String,
        /// The number of operands the operator consumes.
        required:  usize,
        /// The number of values that were on the stack.
        available: usize,
        /// The position of the operator.
        position:  usize,
    },
    /// After all tokens were consumed the stack did not hold exactly one
    /// value.
    InvalidExpression {
        /// The number of values left on the stack.
        remaining: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The position of the division operator.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperation { symbol, position } => {
                write!(f, "Error at token {position}: Unknown operation '{symbol}'.")
            },
            Self::StackUnderflow { symbol,
                                   required,
                                   available,
                                   position, } => write!(f,
                                                         "Error at token {position}: Operation '{symbol}' needs {required} operand(s), but the stack holds {available}."),
            Self::InvalidExpression { remaining } => write!(f,
                                                            "Error: Invalid expression, {remaining} value(s) left on the stack instead of 1."),
            Self::DivisionByZero { position } => {
                write!(f, "Error at token {position}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
