mod cases;

use genexpr::{Bindings, ErrorKind};
use pretty_assertions::assert_eq;

eval_case!(
    operator_at_start,
    input: "+ 'a'",
    error: ErrorKind::InvalidTokenPlacement,
    position: 0,
    message: "Could not parse \"+\". It cannot be used in this position.",
);

eval_case!(
    unclosed_call,
    input: "split('a,b'",
    error: ErrorKind::MissingExpectedToken,
    position: 11,
    message: "Expected ')' but found end of input",
);

eval_case!(
    call_without_parentheses,
    input: "split 'a,b')",
    error: ErrorKind::TrailingCharacters,
    position: 6,
);

eval_case!(
    trailing_argument_comma,
    input: "split('a,b',)",
    error: ErrorKind::InvalidTokenPlacement,
    position: 12,
);

eval_case!(
    ternary_without_colon,
    input: "'a' ? 'b' 'c'",
    error: ErrorKind::MissingExpectedToken,
    position: 10,
    message: "Expected ':' but found string literal",
);

eval_case!(
    ternary_without_else,
    input: "'a' ? 'b' :",
    error: ErrorKind::InvalidTokenPlacement,
    position: 11,
);

eval_case!(
    unterminated_string,
    input: "first & 'abc",
    error: ErrorKind::UnterminatedString,
    position: 8,
);

eval_case!(
    unexpected_character,
    input: "first # last",
    error: ErrorKind::UnexpectedCharacter,
    position: 6,
);

eval_case!(
    doubled_operator,
    input: "'a' + + 'b'",
    error: ErrorKind::InvalidTokenPlacement,
    position: 6,
);

eval_case!(
    juxtaposed_operands,
    input: "first last",
    error: ErrorKind::TrailingCharacters,
    position: 6,
);

eval_case!(
    call_on_literal,
    input: "'a'('b')",
    error: ErrorKind::InvalidFunctionTarget,
    position: 4,
);

eval_case!(
    call_on_call_result,
    input: "split('a', ',')('b')",
    error: ErrorKind::InvalidFunctionTarget,
);

eval_case!(
    unary_minus_is_not_supported,
    input: "-1",
    error: ErrorKind::InvalidTokenPlacement,
    position: 0,
);

eval_case!(
    empty_group,
    input: "()",
    error: ErrorKind::InvalidTokenPlacement,
    position: 1,
);

#[test]
fn test_deep_nesting_fails_cleanly() {
    let source = format!("{}'x'{}", "(".repeat(10_000), ")".repeat(10_000));
    let err = cases::engine()
        .generate(&source, &Bindings::new())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MaxDepthExceeded);
}

#[test]
fn test_long_concatenation_chain() {
    let source = vec!["'a'"; 300].join(" & ");
    let engine = cases::engine();
    assert!(engine.parse(&source).is_ok());
    let results = engine.generate(&source, &Bindings::new()).unwrap();
    assert_eq!(results, ["a".repeat(300)]);
}

#[test]
fn test_long_addition_chain() {
    let source = vec!["1"; 300].join(" + ");
    let results = cases::engine()
        .generate(&source, &Bindings::new())
        .unwrap();
    assert_eq!(results, ["300"]);
}

#[test]
fn test_very_long_chain_evaluates() {
    let source = vec!["'a'"; 5_000].join(" & ");
    let results = cases::engine()
        .generate(&source, &Bindings::new())
        .unwrap();
    assert_eq!(results[0].len(), 5_000);
}
