#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing an expression.
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    InvalidInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Error: Empty input."),
        }
    }
}

impl std::error::Error for ParseError {}
