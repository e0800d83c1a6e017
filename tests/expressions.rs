use std::fs;

use unima::{
    error::{Error, RuntimeError},
    get_results,
    interpreter::{
        evaluator::{Context, Expression},
        value::{Quantity, Value},
    },
    units::UnitVector,
};
use walkdir::WalkDir;

#[test]
fn worksheet_cases_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "math"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        for (slot, result) in get_results(&content).into_iter().enumerate() {
            if let Err(e) = result {
                panic!("Case {} in {:?} failed: {}", slot + 1, path, e);
            }
        }
    }

    assert!(count > 0, "No worksheet cases found in tests/cases");
}

fn final_quantity(source: &str) -> Quantity {
    let results = get_results(source);
    let result = results.last()
                        .unwrap_or_else(|| panic!("No expressions in {source:?}"));

    match result {
        Ok(Value::Scalar(quantity)) => *quantity,
        Ok(other) => panic!("Expected a scalar from {source:?}, got {other}"),
        Err(e) => panic!("Script failed: {source:?}\nError: {e}"),
    }
}

fn assert_value(source: &str, expected: f64) {
    let quantity = final_quantity(source);
    assert!((quantity.value - expected).abs() < 1e-9,
            "{source:?} evaluated to {}, expected {expected}",
            quantity.value);
}

fn assert_quantity(source: &str, expected: f64, unit: UnitVector) {
    let quantity = final_quantity(source);
    assert!((quantity.value - expected).abs() < 1e-9,
            "{source:?} evaluated to {}, expected {expected}",
            quantity.value);
    assert_eq!(quantity.unit, unit, "{source:?} carried the wrong unit");
}

fn assert_failure(source: &str) {
    let results = get_results(source);
    assert!(results.last().is_some_and(Result::is_err),
            "Script succeeded but was expected to fail: {source:?}");
}

fn assert_nan(source: &str) {
    let quantity = final_quantity(source);
    assert!(quantity.value.is_nan(),
            "{source:?} evaluated to {}, expected NaN",
            quantity.value);
}

#[test]
fn arithmetic_and_precedence() {
    assert_value("1 + 2\\cdot3", 7.0);
    assert_value("\\frac{10}{4}", 2.5);
    assert_value("\\frac{\\frac{1}{2}}{4}", 0.125);
    assert_value("2 + 3\\cdot4^2", 50.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("\\left(2+3\\right)\\cdot4", 20.0);
}

#[test]
fn superscripts_cover_a_single_glyph() {
    assert_value("2^3", 8.0);
    assert_value("2^{3^2}", 512.0);
    assert_value("2^3^2", 64.0);
    assert_value("2^34", 32.0);
    assert_value("2^{34}", 17_179_869_184.0);
    assert_value("-2^2", -4.0);
}

#[test]
fn adjacent_factors_multiply() {
    assert_value("2\\pi", std::f64::consts::TAU);
    assert_value("\\pi2", std::f64::consts::TAU);
    assert_value("2(\\pi)", std::f64::consts::TAU);
    assert_value("\\sqrt{9}2", 6.0);
    assert_value("2\\left(3+4\\right)", 14.0);
    assert_value("1.5\\cdot10^{3}", 1500.0);
}

#[test]
fn builtin_functions() {
    assert_value("\\sin\\pi/2", 1.0);
    assert_value("\\cos0", 1.0);
    assert_value("\\tan^{-1}(1)", std::f64::consts::FRAC_PI_4);
    assert_value("\\log_2(8)", 3.0);
    assert_value("\\log_28", 3.0);
    assert_value("\\log(100)", 2.0);
    assert_value("\\ln(10)", std::f64::consts::LN_10);
    assert_value("\\nCr(6, 2)", 15.0);
    assert_value("\\nPr(5, 2)", 20.0);
    assert_value("\\sqrt{16}", 4.0);
    assert_value("\\sqrt{16}+2", 6.0);
    assert_value("\\sqrt[3]{27}", 3.0);
    assert_value("|2-5|", 3.0);
    assert_value("\\left|2-5\\right|", 3.0);
    assert_value("\\operatorname{floor}(2.9)", 2.0);
    assert_value("\\operatorname{ceil}(2.1)", 3.0);
    assert_value("\\operatorname{round}(2.4, 0)", 2.0);
    assert_value("\\operatorname{round}(2.5)", 3.0);
    assert_value("\\nCr(6,2)\\pi", 15.0 * std::f64::consts::PI);
    assert_value("|2-5|\\pi", 3.0 * std::f64::consts::PI);
}

#[test]
fn domain_errors_become_nan() {
    assert_nan("\\ln(-1)");
    assert_nan("\\ln(0)");
    assert_nan("\\sin^{-1}(2)");
    assert_nan("\\log_1(5)");
    assert_nan("(-4)^{0.5}");

    // Base zero reads as the plain base-ten log.
    assert_value("\\log_0(100)", 2.0);
}

#[test]
fn factorials() {
    assert_value("5!", 120.0);
    assert_value("0!", 1.0);
    assert_value("-3!", -6.0);
    assert_value("\\operatorname{fact}(4)", 24.0);

    // The factorial reads the real part and drops the unit.
    assert_quantity("x = 5\\m; x!", 120.0, UnitVector::DIMENSIONLESS);
}

#[test]
fn lexing_failures() {
    assert_failure("1.2.3");
    assert_failure("2 # 3");
    assert_failure("\\operatorname{blah}(1)");
    assert_failure("x_{incomplete");
}

#[test]
fn parsing_failures() {
    assert_failure("(1+2");
    assert_failure("2+");
    assert_failure("\\frac{1");
    assert_failure("(2+3)!");
    assert_failure("2^.5");
    assert_failure("\\nCr 6");
}

#[test]
fn unit_arithmetic() {
    assert_quantity("5\\km", 5000.0, UnitVector::METRE);
    assert_quantity("\\frac{\\kg\\m}{\\s^2}", 1.0, UnitVector::NEWTON);
    assert_quantity("\\kg\\m/\\s^2", 1.0, UnitVector::NEWTON);
    assert_quantity("2\\J + 3\\J", 5.0, UnitVector::JOULE);
    assert_quantity("1\\mu s", 1e-6, UnitVector::SECOND);
    assert_quantity("2\\GHz", 2e9, UnitVector::HERTZ);
    assert_quantity("\\m^3", 1.0, UnitVector([3, 0, 0, 0, 0, 0, 0]));
    assert_quantity("60\\cdot\\frac{\\m}{\\s}", 60.0, UnitVector([1, -1, 0, 0, 0, 0, 0]));

    // Rounding family and the absolute value keep the operand's unit.
    assert_quantity("\\left|1\\m - 4\\m\\right|", 3.0, UnitVector::METRE);
    assert_quantity("\\operatorname{floor}(2.9\\m)", 2.0, UnitVector::METRE);
    assert_quantity("\\operatorname{ceil}(2.1\\m)", 3.0, UnitVector::METRE);
    assert_quantity("\\operatorname{round}(2.44\\m, 1)", 2.4, UnitVector::METRE);

    // Adding mismatched dimensions has no physical reading and collapses.
    assert_quantity("5\\m + 2\\s", 7.0, UnitVector::DIMENSIONLESS);
}

#[test]
fn physical_constants() {
    let speed = final_quantity("c");
    assert!((speed.value - 2.99792458e8).abs() < 1.0);
    assert_eq!(speed.unit, UnitVector([1, -1, 0, 0, 0, 0, 0]));

    let rest_energy = final_quantity("m_e c^2");
    assert_eq!(rest_energy.unit, UnitVector::JOULE);
    assert!(rest_energy.value > 8.2e-14 && rest_energy.value < 8.3e-14);

    // Constants win lookups; assignments cannot shadow them.
    let shadowed = final_quantity("c = 5; c");
    assert!((shadowed.value - 2.99792458e8).abs() < 1.0);

    // The gas constant is not seeded, so `R` is free for resistances.
    assert_failure("R");
    assert_value("R = 100; R", 100.0);
}

#[test]
fn batches_share_state() {
    assert_value("x = 5; x^2", 25.0);
    assert_value("2+3; ans\\cdot2", 10.0);
    assert_value("f(x) = x^2; f(3)", 9.0);
    assert_value("g(a, b) = a\\cdot b; g(3, 4)", 12.0);
}

#[test]
fn batch_slots_fail_independently() {
    let results = get_results("q + 1; q = 2");
    assert!(matches!(&results[0],
                     Err(Error::Runtime(RuntimeError::UnknownVariable { name })) if name == "q"));
    assert_eq!(results[1].as_ref().unwrap().as_scalar().unwrap().value, 2.0);
}

#[test]
fn function_calls_check_arity() {
    let results = get_results("f(x, y) = x + y; f(3)");
    assert!(matches!(&results[1],
                     Err(Error::Runtime(RuntimeError::ArgumentCountMismatch { .. }))));

    let results = get_results("h(3)");
    assert!(matches!(&results[0],
                     Err(Error::Runtime(RuntimeError::UnknownFunction { name })) if name == "h"));
}

#[test]
fn conversion_targets() {
    assert_quantity("5\\m+55\\cm @ \\cm", 555.0, UnitVector::METRE);
    assert_quantity("500\\m @ \\km", 0.5, UnitVector::METRE);

    // A conversion whose dimension does not match leaves the result alone.
    assert_quantity("5\\m @ \\s", 5.0, UnitVector::METRE);
    assert_quantity("42 @ \\m", 42.0, UnitVector::DIMENSIONLESS);
}

#[test]
fn only_display_leaves_keep_significant_figures() {
    let results = get_results("x = 2.5; x\\cdot4.0");

    let assignment = results[0].as_ref().unwrap().as_scalar().unwrap();
    assert_eq!(assignment.sig_figs, 0);

    let reading = results[1].as_ref().unwrap().as_scalar().unwrap();
    assert_eq!(reading.value, 10.0);
    assert_eq!(reading.sig_figs, 2);

    // Combination keeps the least precise non-exact figure count, and
    // exact factors such as constants never limit it.
    let results = get_results("x = 2.5; x\\cdot4.00");
    let reading = results[1].as_ref().unwrap().as_scalar().unwrap();
    assert_eq!(reading.sig_figs, 2);

    let results = get_results("x = 2.5; \\pi x");
    let reading = results[1].as_ref().unwrap().as_scalar().unwrap();
    assert_eq!(reading.sig_figs, 2);
}

#[test]
fn lists_broadcast_elementwise() {
    let scaled = final_list("[1, 2, 3]\\cdot2");
    assert_eq!(values_of(&scaled), vec![2.0, 4.0, 6.0]);

    let summed = final_list("[1, 2, 3] + [10, 20]");
    assert_eq!(values_of(&summed), vec![11.0, 22.0]);

    let roots = final_list("\\sqrt{[4, 9]}");
    assert_eq!(values_of(&roots), vec![2.0, 3.0]);
}

fn final_list(source: &str) -> Vec<Quantity> {
    let results = get_results(source);
    match results.last() {
        Some(Ok(Value::List(list))) => list.elements.clone(),
        other => panic!("Expected a list from {source:?}, got {other:?}"),
    }
}

fn values_of(elements: &[Quantity]) -> Vec<f64> {
    elements.iter().map(|quantity| quantity.value).collect()
}

#[test]
fn assigned_units_drive_formula_suggestions() {
    let mut context = Context::new();
    let batch = [Expression::new("m = 2\\kg"),
                 Expression::new("a = 3\\frac{\\m}{\\s^2}")];
    context.evaluate_expression_list(&batch);

    let formulas = context.available_formulas(UnitVector::NEWTON);
    assert!(formulas.iter()
                    .any(|formula| formula.name == "Newton's Second Law (solve for F)"));
}
