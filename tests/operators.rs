mod cases;

use genexpr::{Bindings, ErrorKind};
use pretty_assertions::assert_eq;

fn eval(source: &str) -> String {
    let results = cases::engine()
        .generate(source, &Bindings::new())
        .unwrap_or_else(|e| panic!("{source:?} failed: {e}"));
    assert_eq!(results.len(), 1, "{source:?} should produce one result");
    results.into_iter().next().unwrap_or_default()
}

#[test]
fn test_arithmetic_table() {
    let cases = [
        ("1 + 2", "3"),
        ("10 - 5", "5"),
        ("3 * 4", "12"),
        ("2 + 3 * 4", "14"),
        ("(2 + 3) * 4", "20"),
        ("10 - 2 - 3", "5"),
        ("100 / 10 / 5", "2"),
        ("1.5 + 2.5", "4.0"),
        ("0.1 + 0.2", "0.3"),
        ("10.0 - 5.5", "4.5"),
        ("2.50 * 2", "5.00"),
        ("'25' + 10", "35"),
        ("99999999999999999999 + 1", "100000000000000000000"),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "source: {source}");
    }
}

#[test]
fn test_division_table() {
    let cases = [
        ("10 / 2", "5"),
        ("10 / 4", "2"),
        ("10 / 3", "3"),
        ("10.0 / 2", "5.0"),
        ("7.00 / 2", "3.00"),
        ("10.5 / 3", "3.5"),
        ("1.1 / 3", "0.3666666666666667"),
        ("7.5 / 2.5", "3"),
        ("1 / 0.5", "2"),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "source: {source}");
    }
}

#[test]
fn test_comparison_table() {
    let cases = [
        ("1 < 2", "true"),
        ("2 <= 2", "true"),
        ("3 > 2", "true"),
        ("2 >= 3", "false"),
        ("2 = 2.0", "true"),
        ("2 != 2", "false"),
        ("'9' < '10'", "true"),
        ("'b' > 'a'", "true"),
        ("'abc' = 'abc'", "true"),
        ("'Abc' = 'abc'", "false"),
        ("'a' < 'B'", "false"),
        ("1 + 1 = 2", "true"),
        ("equals(1, 1) = equals(2, 2)", "true"),
        ("equals(1, 1) != equals(1, 2)", "true"),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "source: {source}");
    }
}

#[test]
fn test_comparisons_with_missing_values() {
    let engine = cases::engine();
    let bindings = Bindings::new().with("none", Vec::<String>::new());
    let check = |source: &str| engine.generate(source, &bindings).unwrap();

    assert_eq!(check("none = split(missing, ',')"), ["true"]);
    assert_eq!(check("none != 'a'"), ["true"]);
    assert_eq!(check("none = 'a'"), ["false"]);
    assert_eq!(check("none < 'a'"), ["false"]);
    assert_eq!(check("'a' >= none"), ["false"]);
}

#[test]
fn test_absent_binding_compares_as_empty_text() {
    let results = cases::engine()
        .generate("missing = ''", &Bindings::new())
        .unwrap();
    assert_eq!(results, ["true"]);
}

eval_case!(
    division_by_zero,
    input: "10 / 0",
    error: ErrorKind::DivisionByZero,
    position: 3,
    message: "Division by zero",
);

eval_case!(
    division_by_decimal_zero,
    input: "10 / 0.00",
    error: ErrorKind::DivisionByZero,
);

eval_case!(
    multiply_text,
    input: "'hello' * 5",
    error: ErrorKind::UnsupportedOperation,
    position: 8,
    message: "Operator '*' is not supported for STRING and INTEGER operands",
);

eval_case!(
    add_boolean,
    input: "equals(1, 1) + 1",
    error: ErrorKind::UnsupportedOperation,
    position: 13,
);

eval_case!(
    order_booleans,
    input: "equals(1, 1) < equals(1, 2)",
    error: ErrorKind::UnsupportedOperation,
);

eval_case!(
    subtract_from_empty_binding,
    input: "missing - 1",
    error: ErrorKind::UnsupportedOperation,
);

eval_case!(
    concatenation_of_numbers_keeps_text,
    input: "1.50 & 2",
    result: ["1.502"],
);

eval_case!(
    concatenation_shares_precedence_with_addition,
    input: "'n=' & 1 + 2",
    ast: "(+ (& 'n=' 1) 2)",
    error: ErrorKind::UnsupportedOperation,
);

eval_case!(
    grouped_sum_then_concatenation,
    input: "'n=' & (1 + 2)",
    result: ["n=3"],
);
