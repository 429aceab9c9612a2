use pretty_assertions::assert_eq;

use super::*;

fn number(text: &str) -> Value {
    Value::Number(number::parse(text).unwrap())
}

#[test]
fn test_first_scalar_per_variant() {
    assert_eq!(Value::str("a").first_scalar().as_deref(), Some("a"));
    assert_eq!(number("1.50").first_scalar().as_deref(), Some("1.50"));
    assert_eq!(Value::Bool(true).first_scalar().as_deref(), Some("true"));
    assert_eq!(
        Value::DateTime("2025-01-02".into()).first_scalar().as_deref(),
        Some("2025-01-02")
    );
    assert_eq!(
        Value::Map(vec![("k".into(), "v".into()), ("x".into(), "y".into())])
            .first_scalar()
            .as_deref(),
        Some("v")
    );
    assert_eq!(
        Value::Multi(vec!["x".into(), "y".into()]).first_scalar().as_deref(),
        Some("x")
    );
    assert_eq!(Value::Multi(vec![]).first_scalar(), None);
    assert_eq!(Value::Empty.first_scalar(), None);
}

#[test]
fn test_as_list_expansion() {
    assert_eq!(Value::str("").as_list(), vec![String::new()]);
    assert_eq!(Value::Empty.as_list(), Vec::<String>::new());
    assert_eq!(
        Value::Map(vec![("a".into(), "1".into()), ("b".into(), "2".into())]).as_list(),
        vec!["1".to_string(), "2".to_string()]
    );
    assert!(Value::Multi(vec![]).is_empty_list());
    assert!(!Value::str("").is_empty_list());
}

#[test]
fn test_data_type() {
    assert_eq!(Value::str("12").data_type(), DataType::String);
    assert_eq!(number("12").data_type(), DataType::Integer);
    assert_eq!(number("12.00").data_type(), DataType::Integer);
    assert_eq!(number("12.5").data_type(), DataType::Decimal);
    assert_eq!(Value::Bool(false).data_type(), DataType::Boolean);
    assert_eq!(Value::Map(vec![]).data_type(), DataType::Map);
    assert_eq!(Value::Empty.data_type(), DataType::Unknown);
    assert_eq!(Value::Multi(vec![]).data_type(), DataType::Unknown);
    assert_eq!(
        Value::Multi(vec!["3.5".into(), "x".into()]).data_type(),
        DataType::Decimal
    );
    assert_eq!(
        Value::Multi(vec!["TRUE".into()]).data_type(),
        DataType::Boolean
    );
}

#[test]
fn test_infer_type() {
    assert_eq!(infer_type("true"), DataType::Boolean);
    assert_eq!(infer_type("False"), DataType::Boolean);
    assert_eq!(infer_type("-42"), DataType::Integer);
    assert_eq!(infer_type("3.14"), DataType::Decimal);
    assert_eq!(infer_type("3."), DataType::String);
    assert_eq!(infer_type("a:1, b:2"), DataType::Map);
    assert_eq!(infer_type("a:1,"), DataType::String);
    assert_eq!(infer_type("hello"), DataType::String);
    assert!(is_integer("007"));
    assert!(!is_integer("1.0"));
    assert!(is_decimal("-0.5"));
    assert!(is_map_text("k:v"));
}

#[test]
fn test_coerce_number() {
    assert_eq!(Value::str("25").coerce_number(), number::parse("25"));
    assert_eq!(
        Value::Multi(vec!["2.5".into()]).coerce_number(),
        number::parse("2.5")
    );
    assert_eq!(Value::str("25a").coerce_number(), None);
    assert_eq!(Value::str(" 25").coerce_number(), None);
    assert_eq!(Value::Bool(true).coerce_number(), None);
    assert_eq!(Value::Empty.coerce_number(), None);
}

#[test]
fn test_binding_conversion() {
    assert_eq!(Binding::Null.to_value(), Value::str(""));
    assert_eq!(Binding::from(25).to_value(), number("25"));
    assert_eq!(Binding::from(2.5).to_value(), number("2.5"));
    assert_eq!(Binding::from(true).to_value(), Value::Bool(true));
    assert_eq!(
        Binding::from(vec!["a", "b"]).to_value(),
        Value::Multi(vec!["a".into(), "b".into()])
    );
    assert_eq!(
        Binding::List(vec![Binding::Null, Binding::from(1), Binding::from(vec![1, 2])]).to_value(),
        Value::Multi(vec!["null".into(), "1".into(), "[1, 2]".into()])
    );
    assert_eq!(
        Binding::Map(vec![
            ("k".into(), Binding::from("v")),
            ("n".into(), Binding::Map(vec![("x".into(), Binding::from(1))])),
        ])
        .to_value(),
        Value::Map(vec![
            ("k".into(), "v".into()),
            ("n".into(), "{x=1}".into())
        ])
    );
}

#[test]
fn test_bindings_resolve_and_replace() {
    let mut bindings = Bindings::new().with("first", "Ada").with("age", 36);
    assert_eq!(bindings.resolve("first"), Value::str("Ada"));
    assert_eq!(bindings.resolve("missing"), Value::str(""));

    bindings.insert("first", "Grace");
    assert_eq!(bindings.len(), 2);
    assert_eq!(bindings.names().collect::<Vec<_>>(), vec!["first", "age"]);
    assert_eq!(bindings.resolve("first"), Value::str("Grace"));

    let collected: Bindings = [("a", "1"), ("b", "2")].into_iter().collect();
    assert_eq!(collected.get("b"), Some(&Binding::from("2")));
}
