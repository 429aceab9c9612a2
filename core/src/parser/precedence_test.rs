use pretty_assertions::assert_eq;

use super::parse;

// Precedence is checked by comparing the fully parenthesized rendering of
// two sources that should group the same way.
fn ast(source: &str) -> String {
    parse(source)
        .unwrap_or_else(|e| panic!("Expression parsing failed: {}\n{}", source, e))
        .to_string()
}

#[test]
fn test_addition_vs_subtraction() {
    assert_eq!(ast("a + b - c"), ast("(a + b) - c"));
    assert_eq!(ast("a - b + c"), ast("(a - b) + c"));
    assert_eq!(
        ast("a + b - c + d - e + f"),
        ast("((((a + b) - c) + d) - e) + f")
    );
}

#[test]
fn test_multiplication_vs_division() {
    assert_eq!(ast("a * b / c"), ast("(a * b) / c"));
    assert_eq!(ast("a / b * c"), ast("(a / b) * c"));
}

#[test]
fn test_addition_vs_multiplication() {
    assert_eq!(ast("a + b * c"), ast("a + (b * c)"));
    assert_eq!(ast("a * b + c"), ast("(a * b) + c"));
    assert_eq!(ast("2 + 3 * 4"), "(+ 2 (* 3 4))");
}

#[test]
fn test_concat_shares_sum_precedence() {
    assert_eq!(ast("a & b + c"), ast("(a & b) + c"));
    assert_eq!(ast("a + b & c"), ast("(a + b) & c"));
    assert_eq!(ast("a & b * c"), ast("a & (b * c)"));
}

#[test]
fn test_comparison_vs_arithmetic() {
    assert_eq!(ast("a + b > c"), ast("(a + b) > c"));
    assert_eq!(ast("a < b & c"), ast("a < (b & c)"));
    assert_eq!(ast("a = b != c"), ast("(a = b) != c"));
}

#[test]
fn test_ternary_is_weakest() {
    assert_eq!(ast("a = b ? c & d : e"), ast("(a = b) ? (c & d) : e"));
    assert_eq!(ast("a ? 'x' : b ? 'y' : 'z'"), ast("a ? 'x' : (b ? 'y' : 'z')"));
}

#[test]
fn test_call_binds_tightest() {
    assert_eq!(ast("f(a) & b"), ast("(f(a)) & b"));
    assert_eq!(ast("a * f(b)"), "(* a f(b))");
}

#[test]
fn test_parentheses_override() {
    assert_eq!(ast("(2 + 3) * 4"), "(* (+ 2 3) 4)");
    assert_eq!(ast("'a' & ('b' & 'c')"), "(& 'a' (& 'b' 'c'))");
}
