use std::borrow::Cow;

use bigdecimal::BigDecimal;

use super::data_type::{DataType, infer_type};
use super::number;

/// Result of evaluating an expression.
///
/// `Multi` is a set of candidate outputs rather than one value, and `Empty`
/// is the explicit absence of a value. Both drive the broadcasting rules of
/// the operators and built-in functions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Number(BigDecimal),
    Bool(bool),
    /// Canonical ISO-8601 text, produced once by `date(...)`.
    DateTime(String),
    /// Ordered key/value text pairs.
    Map(Vec<(String, String)>),
    Multi(Vec<String>),
    Empty,
}

impl Value {
    pub fn str(text: impl Into<String>) -> Self {
        Value::Str(text.into())
    }

    /// The first scalar this value stands for, `None` for `Empty` and for
    /// empty collections.
    pub fn first_scalar(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Str(s) | Value::DateTime(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(number::plain_string(n))),
            Value::Bool(b) => Some(Cow::Borrowed(bool_text(*b))),
            Value::Map(entries) => entries.first().map(|(_, v)| Cow::Borrowed(v.as_str())),
            Value::Multi(items) => items.first().map(|s| Cow::Borrowed(s.as_str())),
            Value::Empty => None,
        }
    }

    /// First scalar, or the empty string when there is none.
    pub fn first_or_empty(&self) -> Cow<'_, str> {
        self.first_scalar().unwrap_or(Cow::Borrowed(""))
    }

    /// Full expansion into output strings. Maps expand to their values.
    pub fn as_list(&self) -> Vec<String> {
        match self {
            Value::Str(s) | Value::DateTime(s) => vec![s.clone()],
            Value::Number(n) => vec![number::plain_string(n)],
            Value::Bool(b) => vec![bool_text(*b).to_string()],
            Value::Map(entries) => entries.iter().map(|(_, v)| v.clone()).collect(),
            Value::Multi(items) => items.clone(),
            Value::Empty => Vec::new(),
        }
    }

    /// True when [`Value::as_list`] would be empty, without allocating.
    pub fn is_empty_list(&self) -> bool {
        match self {
            Value::Map(entries) => entries.is_empty(),
            Value::Multi(items) => items.is_empty(),
            Value::Empty => true,
            _ => false,
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Value::Multi(_))
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Value::Str(_) => DataType::String,
            Value::Number(n) if number::is_integral(n) => DataType::Integer,
            Value::Number(_) => DataType::Decimal,
            Value::Bool(_) => DataType::Boolean,
            Value::DateTime(_) => DataType::DateTime,
            Value::Map(_) => DataType::Map,
            Value::Multi(items) => items
                .first()
                .map_or(DataType::Unknown, |first| infer_type(first)),
            Value::Empty => DataType::Unknown,
        }
    }

    /// Numeric view of the value: numbers as-is, otherwise the first scalar
    /// when it reads as an integer or decimal.
    pub fn coerce_number(&self) -> Option<BigDecimal> {
        match self {
            Value::Number(n) => Some(n.clone()),
            other => {
                let text = other.first_scalar()?;
                if super::is_integer(&text) || super::is_decimal(&text) {
                    number::parse(&text)
                } else {
                    None
                }
            }
        }
    }
}

fn bool_text(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Str(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Str(text)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<BigDecimal> for Value {
    fn from(n: BigDecimal) -> Self {
        Value::Number(n)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::Multi(items)
    }
}
