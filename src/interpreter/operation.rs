/// The number of operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One operand.
    Unary,
    /// Two operands, left and right.
    Binary,
}

impl Arity {
    /// Returns the number of operands as a count.
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// Operators taking a left and a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `/`
    Div,
    /// `*`
    Mul,
    /// `^`
    Pow,
}

/// Operators taking a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `sin`
    Sin,
}

/// Represents an operation from the fixed registry.
///
/// The variant carries the arity, so the evaluator knows how many operands to
/// pop before it looks at the operator itself. The registry is
/// [`Operation::ALL`]; it is a constant and never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// A binary operation.
    Binary(BinaryOperator),
    /// A unary operation.
    Unary(UnaryOperator),
}

impl Operation {
    /// Every registered operation, in registry order.
    pub const ALL: [Self; 6] = [Self::Binary(BinaryOperator::Add),
                                Self::Binary(BinaryOperator::Sub),
                                Self::Binary(BinaryOperator::Div),
                                Self::Binary(BinaryOperator::Mul),
                                Self::Binary(BinaryOperator::Pow),
                                Self::Unary(UnaryOperator::Sin)];

    /// Resolves a symbol to its operation.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Returns
    /// - `Some(Operation)`: If the symbol is registered.
    /// - `None`: For any other symbol.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::operation::{Arity, BinaryOperator, Operation};
    ///
    /// let op = Operation::from_symbol("^").unwrap();
    /// assert_eq!(op, Operation::Binary(BinaryOperator::Pow));
    /// assert_eq!(op.arity(), Arity::Binary);
    /// assert_eq!(op.name(), "exp");
    ///
    /// assert_eq!(Operation::from_symbol("sin").map(Operation::arity), Some(Arity::Unary));
    /// assert!(Operation::from_symbol("cos").is_none());
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// The symbol that selects the operation in an expression.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Binary(BinaryOperator::Add) => "+",
            Self::Binary(BinaryOperator::Sub) => "-",
            Self::Binary(BinaryOperator::Div) => "/",
            Self::Binary(BinaryOperator::Mul) => "*",
            Self::Binary(BinaryOperator::Pow) => "^",
            Self::Unary(UnaryOperator::Sin) => "sin",
        }
    }

    /// The canonical name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary(BinaryOperator::Add) => "plus",
            Self::Binary(BinaryOperator::Sub) => "minus",
            Self::Binary(BinaryOperator::Div) => "div",
            Self::Binary(BinaryOperator::Mul) => "mul",
            Self::Binary(BinaryOperator::Pow) => "exp",
            Self::Unary(UnaryOperator::Sin) => "sin",
        }
    }

    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Binary(_) => Arity::Binary,
            Self::Unary(_) => Arity::Unary,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
