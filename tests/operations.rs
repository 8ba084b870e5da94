use opcalc::{
    evaluator::{modulo::modulo, power::power, sqrt::sqrt},
    get_result,
};

fn to_strings(operands: &[&str]) -> Vec<String> {
    operands.iter().map(ToString::to_string).collect()
}

fn assert_result(operation: &str, operands: &[&str], expected: &str) {
    match get_result(operation, &to_strings(operands)) {
        Ok(line) => assert_eq!(line, expected),
        Err(e) => panic!("'{operation}' failed unexpectedly: {e}"),
    }
}

fn assert_failure(operation: &str, operands: &[&str], fragment: &str) {
    match get_result(operation, &to_strings(operands)) {
        Ok(line) => panic!("'{operation}' produced '{line}' but was expected to fail"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(fragment),
                    "error message '{message}' does not mention '{fragment}'");
        },
    }
}

#[test]
fn basic_arithmetic() {
    assert_result("add", &["2", "3"], "2 add 3 = 5");
    assert_result("subtract", &["3", "8"], "3 subtract 8 = -5");
    assert_result("multiply", &["-4", "-5"], "-4 multiply -5 = 20");
    assert_result("divide", &["7", "2"], "7 divide 2 = 3.5");
}

#[test]
fn fractional_operands() {
    assert_result("add", &["0.1", "0.2"], &format!("0.1 add 0.2 = {}", 0.1_f64 + 0.2_f64));
    assert_result("multiply", &["2.5", "4"], "2.5 multiply 4 = 10");
}

#[test]
fn division_by_zero_fails_for_every_dividend() {
    assert_failure("divide", &["10", "0"], "Division by zero");
    assert_failure("divide", &["0", "0"], "Division by zero");
    assert_failure("divide", &["10", "-0"], "Division by zero");
}

#[test]
fn modulo_sign_follows_the_dividend() {
    assert_result("modulo", &["-10", "3"], "-10 modulo 3 = -1");
    assert_result("modulo", &["10", "-3"], "10 modulo -3 = 1");
    assert_result("modulo", &["-10", "-3"], "-10 modulo -3 = -1");
    assert_result("modulo", &["10", "3"], "10 modulo 3 = 1");
}

#[test]
fn modulo_by_zero_fails() {
    assert_failure("modulo", &["10", "0"], "Modulo by zero");
}

#[test]
fn power_edge_cases() {
    assert_result("power", &["2", "-2"], "2 power -2 = 0.25");
    assert_result("power", &["5", "0"], "5 power 0 = 1");
    assert_result("power", &["0", "0"], "0 power 0 = 1");
    assert_result("power", &["-2", "3"], "-2 power 3 = -8");
    assert_result("power", &["9", "0.5"], "9 power 0.5 = 3");
}

#[test]
fn power_with_negative_base_and_fractional_exponent_fails() {
    assert_failure("power", &["-2", "0.5"], "Invalid operation");
    assert_failure("power", &["-8", "-0.5"], "Invalid operation");
}

#[test]
fn square_roots() {
    assert_result("sqrt", &["16"], "sqrt(16) = 4");
    assert_result("sqrt", &["0"], "sqrt(0) = 0");
    assert_result("sqrt", &["2.25"], "sqrt(2.25) = 1.5");
    assert_failure("sqrt", &["-4"], "square root of the negative number");
}

#[test]
fn square_root_of_a_square_recovers_the_magnitude() {
    for x in [-12.75, -3.0, -0.5, 0.0, 0.5, 2.0, 12.75] {
        let squared = power(x, 2.0).unwrap();
        let root = sqrt(squared).unwrap();
        assert!((root - x.abs()).abs() < 1e-12,
                "sqrt(power({x}, 2)) was {root}, expected {}",
                x.abs());
    }
}

#[test]
fn truncated_remainder_properties() {
    for (a, b) in [(7.5, 2.0), (-7.5, 2.0), (7.5, -2.0), (-7.5, -2.0)] {
        let r = modulo(a, b).unwrap();
        assert!(r == 0.0 || (r < 0.0) == (a < 0.0),
                "modulo({a}, {b}) was {r}, sign does not follow the dividend");
        assert!(r.abs() < b.abs());
    }
}

#[test]
fn unknown_operations_are_rejected() {
    assert_failure("cbrt", &["8"], "Unknown operation 'cbrt'");
    assert_failure("", &["1", "2"], "Unknown operation");
    assert_failure("Add", &["1", "2"], "Unknown operation 'Add'");
}

#[test]
fn operand_count_is_checked() {
    assert_failure("add", &["1"], "expects 2 operands, but got 1");
    assert_failure("add", &["1", "2", "3"], "expects 2 operands, but got 3");
    assert_failure("sqrt", &["4", "9"], "expects 1 operand, but got 2");
    assert_failure("sqrt", &[], "expects 1 operand, but got 0");
}

#[test]
fn non_numeric_operands_are_rejected() {
    assert_failure("add", &["two", "3"], "operand 1 ('two') is not a finite number");
    assert_failure("add", &["2", "3abc"], "operand 2 ('3abc') is not a finite number");
    assert_failure("sqrt", &[""], "operand 1 ('') is not a finite number");
}

#[test]
fn non_finite_operands_are_rejected() {
    assert_failure("add", &["inf", "1"], "is not a finite number");
    assert_failure("add", &["1", "-inf"], "is not a finite number");
    assert_failure("sqrt", &["NaN"], "is not a finite number");
}
