use std::collections::HashMap;

use rpncalc::{
    error::{EvalError, ParseError},
    interpreter::{evaluator::core::Expression, token::Category},
};

const EPSILON: f64 = 1e-9;

fn eval_with(src: &str, variables: &HashMap<String, f64>) -> Result<f64, String> {
    let expression = Expression::new(src).map_err(|e| e.to_string())?;
    expression.evaluate(variables).map_err(|e| e.to_string())
}

fn assert_value(src: &str, expected: f64) {
    match eval_with(src, &HashMap::new()) {
        Ok(value) => assert!((value - expected).abs() < EPSILON,
                             "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_parse_error(src: &str, expected: &ParseError) {
    match Expression::new(src) {
        Ok(expression) => panic!("'{src}' parsed into '{expression}' but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "'{src}' failed with the wrong error"),
    }
}

fn eval_error(src: &str) -> EvalError {
    let expression = Expression::new(src).unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"));
    expression.evaluate(&HashMap::new())
              .expect_err("evaluation succeeded but was expected to fail")
}

fn postfix(src: &str) -> Vec<String> {
    Expression::new(src).unwrap()
                        .postfix()
                        .iter()
                        .map(ToString::to_string)
                        .collect()
}

fn vars(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
}

#[test]
fn number_literals_evaluate_to_themselves() {
    for (src, expected) in [("0", 0.0),
                            ("42", 42.0),
                            ("3.25", 3.25),
                            (".5", 0.5),
                            ("1e3", 1000.0),
                            ("2.5E-2", 0.025),
                            ("6.02e+23", 6.02e23)]
    {
        assert_value(src, expected);
    }
}

#[test]
fn operator_precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("10-4/2", 8.0);
    assert_value("2*3^2", 18.0);
    assert_value("10*(-6+4^2)", 100.0);
}

#[test]
fn binary_operators() {
    assert_value("7+2", 9.0);
    assert_value("7-2", 5.0);
    assert_value("7*2", 14.0);
    assert_value("1/4", 0.25);
    assert_value("2^10", 1024.0);
    assert_value("4^0.5", 2.0);
}

#[test]
fn equal_priorities_fold_left() {
    assert_value("2^3^2", 64.0);
    assert_value("10-4-3", 3.0);
    assert_value("16/4/2", 2.0);
    assert_eq!(postfix("2^3^2"), ["2", "3", "^", "2", "^"]);
}

#[test]
fn unary_minus_and_plus() {
    assert_value("-5+3", -2.0);
    assert_value("3*-2", -6.0);
    assert_value("-(2+3)", -5.0);
    assert_value("+7", 7.0);
    assert_value("2*(+3)", 6.0);
    assert_eq!(postfix("3*-2"), ["3", "0", "2", "-", "*"]);
}

#[test]
fn unary_minus_binds_before_a_following_operator() {
    // `-2^2` is `(0-2)^2`
    assert_value("-2^2", 4.0);
}

#[test]
fn misplaced_operators_are_rejected() {
    assert_parse_error("*5", &ParseError::UnexpectedOperatorPosition { operator: "*".to_string() });
    assert_parse_error("2+/3", &ParseError::UnexpectedOperatorPosition { operator: "/".to_string() });
    assert_parse_error("(^2)", &ParseError::UnexpectedOperatorPosition { operator: "^".to_string() });
}

#[test]
fn unbalanced_brackets() {
    assert_parse_error("(2+3", &ParseError::UnbalancedBrackets);
    assert_parse_error("2+3)", &ParseError::UnbalancedBrackets);
    assert_parse_error(")", &ParseError::UnbalancedBrackets);
    assert_parse_error("((1)", &ParseError::UnbalancedBrackets);
    assert_parse_error("(1))(", &ParseError::UnbalancedBrackets);
}

#[test]
fn variables_are_looked_up_at_evaluation_time() {
    let expression = Expression::new("x+1").unwrap();

    assert_eq!(expression.evaluate(&vars(&[("x", 4.0)])).unwrap(), 5.0);
    assert_eq!(expression.evaluate(&vars(&[("x", -1.0)])).unwrap(), 0.0);
    assert_eq!(expression.evaluate(&HashMap::new()),
               Err(EvalError::UndeclaredVariable { name: "x".to_string() }));
}

#[test]
fn variable_names() {
    let variables = vars(&[("v_0", 3.0), ("x'", 2.0), ("speed", 10.0), ("X", 5.0)]);

    assert_eq!(eval_with("v_0*x'", &variables).unwrap(), 6.0);
    assert_eq!(eval_with("speed/X", &variables).unwrap(), 2.0);
    assert!(eval_with("x", &variables).is_err());
}

#[test]
fn re_evaluation_is_idempotent() {
    let expression = Expression::new("sqrt(a^2+b^2)").unwrap();
    let variables = vars(&[("a", 3.0), ("b", 4.0)]);

    let first = expression.evaluate(&variables).unwrap();
    let second = expression.evaluate(&variables).unwrap();
    assert_eq!(first, 5.0);
    assert_eq!(first, second);
}

#[test]
fn functions() {
    assert_value("sqrt(16)", 4.0);
    assert_value("abs(-3)", 3.0);
    assert_value("exp(0)", 1.0);
    assert_value("ln(exp(2))", 2.0);
    assert_value("log2(8)", 3.0);
    assert_value("log10(1000)", 3.0);
    assert_value("log(100)", 2.0);
    assert_value("sqrt 9", 3.0);
}

#[test]
fn nested_function_calls() {
    assert_value("sqrt(abs(-16))", 4.0);
    assert_value("sin(2*(1+cos(60)))+1", 1.0 + 3.0_f64.to_radians().sin());
    assert_eq!(postfix("sin(2*(1+cos(x)))"),
               ["2", "1", "x", "cos", "+", "*", "sin"]);
}

#[test]
fn trigonometry_in_degrees_and_radians() {
    let half_pi = vars(&[("h", std::f64::consts::FRAC_PI_2)]);

    assert_value("sin(90)", 1.0);
    assert_value("cos(180)", -1.0);
    assert_value("tg(45)", 1.0);
    assert_value("ctg(45)", 1.0);
    assert_value("cot(45)", 1.0);
    assert_eq!(eval_with("sinr(h)", &half_pi).unwrap(), 1.0);
    assert_value("asin(1)", 90.0);
    assert_value("asinr(1)", std::f64::consts::FRAC_PI_2);
    assert_value("acot(1)", 45.0);
    assert_value("atgr(1)", std::f64::consts::FRAC_PI_4);
}

#[test]
fn hyperbolic_functions() {
    assert_value("sinhr(0)", 0.0);
    assert_value("coshr(0)", 1.0);
    assert_value("tanhr(1)", 1.0_f64.tanh());
    assert_value("cothr(1)", 1.0_f64.cosh() / 1.0_f64.sinh());
    assert_value("acothr(2)", (3.0_f64).sqrt().ln());
}

#[test]
fn hyperbolic_functions_use_degrees_without_radian_flag() {
    let quarter_turn = 45.0_f64.to_radians();

    assert_value("sinh(1)", 1.0_f64.to_radians().sinh());
    assert_value("cosh(90)", std::f64::consts::FRAC_PI_2.cosh());
    assert_value("tgh(45)", quarter_turn.tanh());
    assert_value("ctgh(45)", quarter_turn.cosh() / quarter_turn.sinh());
    assert_value("acosh(2)", 2.0_f64.acosh().to_degrees());
    assert_value("atgh(0.5)", 0.5_f64.atanh().to_degrees());
    assert_value("asinhr(1)", 1.0_f64.asinh());
}

#[test]
fn domain_errors_are_invalid_results() {
    for src in ["sqrt(-1)", "1/0", "log(0)", "acos(2)", "ln(-5)", "10^400", "1e400"] {
        assert!(matches!(eval_error(src), EvalError::InvalidNumericResult { .. }),
                "'{src}' should fail with an invalid numeric result");
    }
}

#[test]
fn empty_and_ignored_input() {
    assert_eq!(eval_error(""), EvalError::EmptyExpression);
    assert_eq!(eval_error("  ?? "), EvalError::EmptyExpression);
    assert_value("  2 +\t3 ", 5.0);
    assert_value("2 $ 3 +", 5.0);
}

#[test]
fn operations_without_operands_underflow() {
    assert!(matches!(eval_error("2+"), EvalError::StackUnderflow { required: 2, found: 1, .. }));
    assert!(matches!(eval_error("sqrt()"), EvalError::StackUnderflow { required: 1, found: 0, .. }));
}

#[test]
fn leftover_operands_are_reported() {
    assert_eq!(eval_error("2 3"), EvalError::UnreducedStack { remaining: 2 });
}

#[test]
fn consecutive_deferred_tokens_share_one_slot() {
    // The second unary minus replaces the first at the same level.
    assert_eq!(postfix("--5"), ["0", "0", "5", "-"]);
    assert_eq!(eval_error("--5"), EvalError::UnreducedStack { remaining: 2 });
    assert_value("-(-5)", 5.0);
}

#[test]
fn number_after_digit_is_not_a_variable() {
    let tokens = Expression::new("2x").unwrap();
    assert_eq!(tokens.postfix().len(), 1);
    assert_eq!(tokens.postfix()[0].category(), Category::Number);
    assert_value("2x", 2.0);
}

#[test]
fn expressions_can_be_shared_between_threads() {
    let expression = std::sync::Arc::new(Expression::new("x*2").unwrap());

    let handles: Vec<_> = (0..4).map(|i| {
                                    let expression = std::sync::Arc::clone(&expression);
                                    std::thread::spawn(move || {
                                        let x = f64::from(i);
                                        expression.evaluate(&vars(&[("x", x)])).unwrap()
                                    })
                                })
                                .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), 2.0 * i as f64);
    }
}
