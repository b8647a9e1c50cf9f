use std::fs;

use pretty_assertions::assert_eq;
use rpncalc::{
    error::{ParseError, RuntimeError},
    get_result,
    interpreter::{
        evaluator::core::Evaluator,
        lexer::Token,
        value::{Kind, Value},
    },
};

fn eval(src: &str) -> Result<Value, RuntimeError> {
    Evaluator::new(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"))
                       .evaluate()
}

fn assert_success(src: &str, expected: Value) {
    match eval(src) {
        Ok(value) => assert_eq!(value, expected, "expression {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: &RuntimeError) {
    match eval(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "expression {src:?}"),
    }
}

fn assert_close(src: &str, expected: f64) {
    match eval(src) {
        Ok(Value::Float(value)) => {
            assert!((value - expected).abs() < 1e-12,
                    "expression {src:?} gave {value}, expected {expected}");
        },
        other => panic!("Expression {src:?} gave {other:?}, expected a float"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_success("3 4 +", Value::Integer(7));
    assert_success("7 9 *", Value::Integer(63));
    assert_success("8 5 -", Value::Integer(3));
    assert_success("2 3 ^", Value::Integer(8));
    assert_success("42", Value::Integer(42));
}

#[test]
fn balanced_expressions() {
    assert_success("5 1 2 + 4 * + 3 -", Value::Integer(14));
    assert_success("2 3 4 * +", Value::Integer(14));
    assert_success("2 3 + 4 *", Value::Integer(20));
    assert_success("1 2 3 4 5 + + + +", Value::Integer(15));
    assert_success("2 3 2 ^ ^", Value::Integer(512));
}

#[test]
fn operand_order_is_preserved() {
    assert_success("4 2 -", Value::Integer(2));
    assert_success("2 4 -", Value::Integer(-2));
    assert_success("8 2 /", Value::Integer(4));
    assert_success("2 8 /", Value::Float(0.25));
    assert_success("3 2 ^", Value::Integer(9));
    assert_success("2 3 ^", Value::Integer(8));
}

#[test]
fn division_promotion() {
    assert_success("10 2 /", Value::Integer(5));
    assert_success("-10 2 /", Value::Float(-5.0));
    assert_success("7 2 /", Value::Float(3.5));
    assert_success("7.0 2 /", Value::Float(3.5));
    assert_success("1 3 /", Value::Float(1.0 / 3.0));
}

#[test]
fn power_promotion() {
    assert_success("2 10 ^", Value::Integer(1024));
    assert_success("2 -1 ^", Value::Float(0.5));
    assert_success("2 0 ^", Value::Integer(1));
    assert_success("4 0.5 ^", Value::Float(2.0));
    assert_success("2.0 3 ^", Value::Float(8.0));
    assert_success("0 -1 ^", Value::Float(f64::INFINITY));
}

#[test]
fn integer_overflow_becomes_float() {
    let max = i64::MAX;
    let sum = eval(&format!("{max} 1 +")).unwrap();
    assert_eq!(sum.kind(), Kind::Float);

    let product = eval(&format!("{max} 2 *")).unwrap();
    assert_eq!(product.kind(), Kind::Float);

    assert_eq!(eval("2 64 ^").unwrap(), Value::Float(2f64.powi(64)));
    assert_success("2 62 ^", Value::Integer(1 << 62));
}

#[test]
fn float_literals() {
    assert_success("1.5 2 *", Value::Float(3.0));
    assert_success("-3 2 *", Value::Float(-6.0));
    assert_success("+3 2 *", Value::Float(6.0));
    assert_success("1e3 1 +", Value::Float(1001.0));
    assert_success(".5 .25 +", Value::Float(0.75));
    assert_success("5. 1 +", Value::Float(6.0));
    assert_success("99999999999999999999 1 -", Value::Float(1e20));
}

#[test]
fn mixed_kinds_promote_to_float() {
    assert_success("1 2.5 +", Value::Float(3.5));
    assert_success("2.5 1 -", Value::Float(1.5));
    assert_success("3 1.0 *", Value::Float(3.0));
}

#[test]
fn sine() {
    assert_success("0 sin", Value::Float(0.0));
    assert_close("1 sin", 1f64.sin());
    assert_close("3.141592653589793 2 / sin", 1.0);
    assert_close("1 sin 2 *", 2.0 * 1f64.sin());
    assert_close("0.5 sin sin", 0.5f64.sin().sin());
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("5 0 /", &RuntimeError::DivisionByZero { position: 3 });
    assert_failure("5 0.0 /", &RuntimeError::DivisionByZero { position: 3 });
    assert_failure("5 -0.0 /", &RuntimeError::DivisionByZero { position: 3 });
    assert_failure("1 1 1 - /", &RuntimeError::DivisionByZero { position: 5 });
    assert_success("5 0.000001 /", Value::Float(5.0 / 0.000_001));
}

#[test]
fn leftover_values_are_error() {
    assert_failure("1 2", &RuntimeError::InvalidExpression { remaining: 2 });
    assert_failure("1 2 3 +", &RuntimeError::InvalidExpression { remaining: 2 });
}

#[test]
fn missing_operands_are_error() {
    assert_failure("+",
                   &RuntimeError::StackUnderflow { symbol:    "+".to_string(),
                                                   required:  2,
                                                   available: 0,
                                                   position:  1, });
    assert_failure("3 *",
                   &RuntimeError::StackUnderflow { symbol:    "*".to_string(),
                                                   required:  2,
                                                   available: 1,
                                                   position:  2, });
    assert_failure("sin",
                   &RuntimeError::StackUnderflow { symbol:    "sin".to_string(),
                                                   required:  1,
                                                   available: 0,
                                                   position:  1, });
}

#[test]
fn unknown_operations_are_error() {
    assert_failure("3 4 foo",
                   &RuntimeError::UnknownOperation { symbol:   "foo".to_string(),
                                                     position: 3, });
    assert_failure("3 4 %",
                   &RuntimeError::UnknownOperation { symbol:   "%".to_string(),
                                                     position: 3, });
    assert_failure("1 cos",
                   &RuntimeError::UnknownOperation { symbol:   "cos".to_string(),
                                                     position: 2, });
    assert_failure("1 SIN",
                   &RuntimeError::UnknownOperation { symbol:   "SIN".to_string(),
                                                     position: 2, });
    assert_failure("inf 1 +",
                   &RuntimeError::UnknownOperation { symbol:   "inf".to_string(),
                                                     position: 1, });
    assert_failure("1.2.3",
                   &RuntimeError::UnknownOperation { symbol:   "1.2.3".to_string(),
                                                     position: 1, });
}

#[test]
fn double_space_yields_empty_symbol() {
    assert_failure("1  2 +",
                   &RuntimeError::UnknownOperation { symbol:   String::new(),
                                                     position: 2, });
}

#[test]
fn first_error_wins() {
    assert_failure("+ foo",
                   &RuntimeError::StackUnderflow { symbol:    "+".to_string(),
                                                   required:  2,
                                                   available: 0,
                                                   position:  1, });
    assert_failure("foo +",
                   &RuntimeError::UnknownOperation { symbol:   "foo".to_string(),
                                                     position: 1, });
    assert_failure("1 0 / 2",
                   &RuntimeError::DivisionByZero { position: 3 });
}

#[test]
fn empty_input_is_error() {
    assert_eq!(Evaluator::new("").unwrap_err(), ParseError::InvalidInput);
    assert_eq!(Evaluator::new("   ").unwrap_err(), ParseError::InvalidInput);
    assert_eq!(Evaluator::new("\t\n").unwrap_err(), ParseError::InvalidInput);
    assert!(get_result("").is_err());
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_success("  3 4 +  ", Value::Integer(7));
    assert_success("3 4 +\n", Value::Integer(7));
}

#[test]
fn evaluation_is_repeatable() {
    let evaluator = Evaluator::new("6 3 / 2 ^").unwrap();
    let first = evaluator.evaluate();
    let second = evaluator.evaluate();

    assert_eq!(first, Ok(Value::Integer(4)));
    assert_eq!(first, second);

    let failing = Evaluator::new("1 0 /").unwrap();
    assert_eq!(failing.evaluate(), failing.evaluate());
}

#[test]
fn tokens_keep_positions() {
    let evaluator = Evaluator::new("2 sin").unwrap();
    assert_eq!(evaluator.tokens(),
               &[(Token::Literal(Value::Integer(2)), 1), (Token::Symbol("sin".to_string()), 2)]);
}

#[test]
fn errors_render_with_context() {
    let e = get_result("3 4 foo").unwrap_err();
    assert_eq!(e.to_string(), "Error at token 3: Unknown operation 'foo'.");

    let e = get_result("5 0 /").unwrap_err();
    assert_eq!(e.to_string(), "Error at token 3: Division by zero.");

    let e = get_result("  ").unwrap_err();
    assert_eq!(e.to_string(), "Error: Empty input.");
}

#[test]
fn example_file_works() {
    let contents = fs::read_to_string("tests/example.rpn").expect("missing file");
    let mut count = 0;

    for line in contents.lines().filter(|l| !l.trim().is_empty() && !l.starts_with("//")) {
        let (expression, expected) = line.split_once("=>")
                                         .unwrap_or_else(|| panic!("Malformed line {line:?}"));
        let (printed, kind) = expected.trim()
                                      .rsplit_once(' ')
                                      .unwrap_or_else(|| panic!("Malformed line {line:?}"));

        let value = get_result(expression).unwrap_or_else(|e| {
                                                  panic!("Example {expression:?} failed: {e}")
                                              });
        assert_eq!(value.to_string(), printed, "example {expression:?}");
        assert_eq!(value.kind().to_string(), kind, "example {expression:?}");
        count += 1;
    }

    assert!(count > 0, "No examples found in tests/example.rpn");
}
