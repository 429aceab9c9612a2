/*
 * Map literals are static label/value pairs written into the expression.
 * Their values never consult the bindings, even when a value is spelled
 * like a bound name.
 */

mod cases;

use genexpr::{Bindings, ErrorKind, Value};
use pretty_assertions::assert_eq;

eval_case!(
    map_values_expand,
    input: "greeting:'Hello', name:Ada, n:42, d:1.5",
    ast: "{greeting: 'Hello', name: 'Ada', n: '42', d: '1.5'}",
    result: ["Hello", "Ada", "42", "1.5"],
);

eval_case!(
    map_value_is_lexeme_not_binding,
    input: "style:formal",
    bindings: { "formal" => "SHOULD NOT APPEAR" },
    result: ["formal"],
);

eval_case!(
    map_as_scalar_uses_first_value,
    input: "greeting:'Hello' & '!'",
    result: ["Hello!"],
);

eval_case!(
    map_quoted_value_is_unescaped,
    input: r"k:'a\tb'",
    result: ["a\tb"],
);

eval_case!(
    repeated_key_keeps_slot_takes_last_value,
    input: "a:1, b:2, a:3",
    result: ["3", "2"],
);

eval_case!(
    map_missing_value,
    input: "a:",
    error: ErrorKind::InvalidTokenPlacement,
    position: 2,
    message: "Invalid map value",
);

eval_case!(
    map_non_identifier_key,
    input: "a:1, 'b':2",
    error: ErrorKind::InvalidTokenPlacement,
    position: 5,
    message: "Expected identifier for map key",
);

eval_case!(
    map_key_without_colon,
    input: "a:1, b",
    error: ErrorKind::MissingExpectedToken,
    position: 6,
);

#[test]
fn test_map_value_shape() {
    let value = cases::engine()
        .evaluate("tone:formal, lang:'fr'", &Bindings::new())
        .unwrap();
    assert_eq!(
        value,
        Value::Map(vec![
            ("tone".to_string(), "formal".to_string()),
            ("lang".to_string(), "fr".to_string()),
        ])
    );
}

#[test]
fn test_map_binding_expands_to_values() {
    let bindings = Bindings::new().with(
        "labels",
        genexpr::Binding::Map(vec![
            ("en".to_string(), "Hello".into()),
            ("fr".to_string(), "Bonjour".into()),
        ]),
    );
    let results = cases::engine().generate("labels", &bindings).unwrap();
    assert_eq!(results, ["Hello", "Bonjour"]);
}
