use logos::Logos;

use crate::{error::ParseError, interpreter::value::Value};

/// Represents a token of a postfix expression.
///
/// The input is split on single spaces; each piece becomes exactly one token.
/// Pieces that read as a number in full are literals, everything else is an
/// operator symbol to be resolved against the operation registry at
/// evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `-3` or `1e3`.
    Literal(Value),
    /// Operator symbol tokens, such as `+` or `sin`. Unknown symbols are kept
    /// verbatim so they can be reported.
    Symbol(String),
}

/// Numeric literal grammar.
///
/// Only digit strings are integers. A sign, a decimal point or an exponent
/// makes the literal a float.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Literal {
    /// `42`, `3.14`, `5.`, `.5`, `-2.5e3`, `1e3` or `-3`.
    #[regex(r"[+-]?[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[+-]?\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+", parse_float)]
    #[regex(r"[+-][0-9]+", parse_float)]
    #[regex(r"[0-9]+", parse_integer)]
    Number(Value),
}

/// Splits an expression into positioned tokens.
///
/// Surrounding whitespace is trimmed, then the input is split on every single
/// space. Two consecutive spaces therefore produce an empty symbol, which the
/// evaluator reports as an unknown operation. Positions are 1-based.
///
/// # Errors
/// Returns [`ParseError::InvalidInput`] if nothing but whitespace is left.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{
///     lexer::{Token, tokenize},
///     value::Value,
/// };
///
/// let tokens = tokenize(" 3 4.5 + ").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Literal(Value::Integer(3)), 1),
///                 (Token::Literal(Value::Float(4.5)), 2),
///                 (Token::Symbol("+".to_string()), 3)]);
///
/// assert!(tokenize("   ").is_err());
/// ```
pub fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let trimmed = input.trim_matches(is_trimmed);
    if trimmed.is_empty() {
        return Err(ParseError::InvalidInput);
    }

    Ok(trimmed.split(' ')
              .enumerate()
              .map(|(index, piece)| (classify(piece), index + 1))
              .collect())
}

/// Classifies a single piece of input as a literal or a symbol.
///
/// A piece is a literal only if the literal lexer consumes all of it as one
/// number; `3abc` or `1.2.3` are symbols.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{
///     lexer::{Token, classify},
///     value::Value,
/// };
///
/// assert_eq!(classify("7"), Token::Literal(Value::Integer(7)));
/// assert_eq!(classify("-7"), Token::Literal(Value::Float(-7.0)));
/// assert_eq!(classify("sin"), Token::Symbol("sin".to_string()));
/// ```
#[must_use]
pub fn classify(piece: &str) -> Token {
    let mut lexer = Literal::lexer(piece);

    match (lexer.next(), lexer.next()) {
        (Some(Ok(Literal::Number(value))), None) => Token::Literal(value),
        _ => Token::Symbol(piece.to_string()),
    }
}

/// Characters stripped from both ends of the input.
const fn is_trimmed(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// Parses a floating-point literal from the current token slice.
///
/// # Returns
/// - `Some(Value::Float)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Literal>) -> Option<Value> {
    lex.slice().parse().ok().map(Value::Float)
}
/// Parses an integer literal from the current token slice.
///
/// Digit strings too long for an `i64` are read as floats.
fn parse_integer(lex: &logos::Lexer<Literal>) -> Option<Value> {
    lex.slice()
       .parse()
       .map(Value::Integer)
       .ok()
       .or_else(|| parse_float(lex))
}
