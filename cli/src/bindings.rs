//! Turning command-line inputs into evaluation bindings.

use std::fs;
use std::path::Path;

use genexpr::{Binding, Bindings};
use genexpr_core::values::number;
use serde_json::Value as Json;
use tracing::debug;

use crate::error::CliError;

/// clap value parser for `-i name=value`. Only the first `=` splits, so
/// values may contain more of them.
pub fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

/// Inputs from an optional JSON file, then `name=value` pairs on top.
///
/// Pairs always bind text, the way query parameters arrive. Later pairs
/// replace earlier ones of the same name.
pub fn collect(pairs: &[(String, String)], json: Option<&Path>) -> Result<Bindings, CliError> {
    let mut bindings = match json {
        Some(path) => read_json(path)?,
        None => Bindings::new(),
    };
    for (name, value) in pairs {
        bindings.insert(name.as_str(), value.as_str());
    }
    debug!(count = bindings.len(), "collected inputs");
    Ok(bindings)
}

fn read_json(path: &Path) -> Result<Bindings, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadInputs {
        path: path.display().to_string(),
        source,
    })?;
    from_json(&text).map_err(|err| match err {
        CliError::InvalidJson { source, .. } => CliError::InvalidJson {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })
}

/// Bindings from the fields of a JSON object.
pub fn from_json(text: &str) -> Result<Bindings, CliError> {
    let json: Json = serde_json::from_str(text).map_err(|source| CliError::InvalidJson {
        path: "<inline>".to_string(),
        source,
    })?;
    match json {
        Json::Object(fields) => Ok(fields
            .into_iter()
            .map(|(name, value)| (name, to_binding(value)))
            .collect()),
        other => Err(CliError::JsonNotObject {
            found: json_kind(&other),
        }),
    }
}

fn to_binding(value: Json) -> Binding {
    match value {
        Json::Null => Binding::Null,
        Json::Bool(b) => Binding::Bool(b),
        Json::Number(n) => {
            let text = n.to_string();
            number::parse(&text).map_or(Binding::Str(text), Binding::Number)
        }
        Json::String(s) => Binding::Str(s),
        Json::Array(items) => Binding::List(items.into_iter().map(to_binding).collect()),
        Json::Object(fields) => Binding::Map(
            fields
                .into_iter()
                .map(|(name, value)| (name, to_binding(value)))
                .collect(),
        ),
    }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("lastName=doe"),
            Ok(("lastName".to_string(), "doe".to_string()))
        );
        assert_eq!(
            parse_pair("query=a=b"),
            Ok(("query".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_pair("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_pair("=value").is_err());
        assert!(parse_pair("novalue").is_err());
    }

    #[test]
    fn test_pairs_bind_text() {
        let pairs = vec![
            ("age".to_string(), "30".to_string()),
            ("age".to_string(), "31".to_string()),
        ];
        let bindings = collect(&pairs, None).unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.get("age"), Some(&Binding::Str("31".to_string())));
    }

    #[test]
    fn test_json_values_keep_their_types() {
        let bindings = from_json(
            r#"{"name": "Ada", "age": 36, "ratio": 0.5, "admin": true,
                "nick": null, "aliases": ["a", "b"], "labels": {"en": "Hi"}}"#,
        )
        .unwrap();

        assert_eq!(bindings.get("name"), Some(&Binding::Str("Ada".to_string())));
        assert_eq!(bindings.get("age"), Some(&Binding::from(36)));
        assert_eq!(bindings.get("ratio"), Some(&Binding::from(0.5)));
        assert_eq!(bindings.get("admin"), Some(&Binding::Bool(true)));
        assert_eq!(bindings.get("nick"), Some(&Binding::Null));
        assert_eq!(bindings.get("aliases"), Some(&Binding::from(vec!["a", "b"])));
        assert_eq!(
            bindings.get("labels"),
            Some(&Binding::Map(vec![("en".to_string(), Binding::from("Hi"))]))
        );
    }

    #[test]
    fn test_json_must_be_object() {
        let err = from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, CliError::JsonNotObject { found: "an array" }));
        assert!(matches!(
            from_json("{not json").unwrap_err(),
            CliError::InvalidJson { .. }
        ));
    }
}
