/// Represents a numeric value on the evaluation stack.
///
/// Every literal and every intermediate result carries its numeric kind. The
/// kind is decided by the literal's spelling and by the promotion rules of the
/// operation that produced the value; it is never coerced implicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A floating-point value (double precision).
    Float(f64),
}

/// The numeric kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// See [`Value::Integer`].
    Integer,
    /// See [`Value::Float`].
    Float,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Integers beyond `2^53` lose precision, the same way mixed arithmetic
    /// does when an integer meets a float.
    ///
    /// # Example
    /// ```
    /// use rpncalc::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_float(), 10.0);
    /// assert_eq!(Value::Float(2.5).as_float(), 2.5);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_float(&self) -> f64 {
        match self {
            Self::Integer(n) => *n as f64,
            Self::Float(r) => *r,
        }
    }

    /// Returns `true` if the value is exactly zero (`0`, `0.0` or `-0.0`).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Float(r) => *r == 0.0,
        }
    }

    /// Returns the numeric kind of the value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Integer(_) => Kind::Integer,
            Self::Float(_) => Kind::Float,
        }
    }

    /// Returns `true` if the value is [`Value::Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Value::Float`].
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
        }
    }
}
