use core::fmt;

use bigdecimal::BigDecimal;
use hashbrown::HashMap;

use super::Value;
use super::number;

/// A dynamically typed input value bound to a name.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Null,
    Str(String),
    Number(BigDecimal),
    Bool(bool),
    List(Vec<Binding>),
    Map(Vec<(String, Binding)>),
}

impl Binding {
    /// Convert to the evaluator's value model. Null becomes the empty
    /// string, list elements and map values are stringified.
    pub fn to_value(&self) -> Value {
        match self {
            Binding::Null => Value::Str(String::new()),
            Binding::Str(s) => Value::Str(s.clone()),
            Binding::Number(n) => Value::Number(n.clone()),
            Binding::Bool(b) => Value::Bool(*b),
            Binding::List(items) => Value::Multi(items.iter().map(|b| b.to_string()).collect()),
            Binding::Map(entries) => Value::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_string()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Null => f.write_str("null"),
            Binding::Str(s) => f.write_str(s),
            Binding::Number(n) => f.write_str(&number::plain_string(n)),
            Binding::Bool(b) => write!(f, "{}", b),
            Binding::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Binding::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for Binding {
    fn from(s: &str) -> Self {
        Binding::Str(s.to_string())
    }
}

impl From<String> for Binding {
    fn from(s: String) -> Self {
        Binding::Str(s)
    }
}

impl From<bool> for Binding {
    fn from(b: bool) -> Self {
        Binding::Bool(b)
    }
}

impl From<BigDecimal> for Binding {
    fn from(n: BigDecimal) -> Self {
        Binding::Number(n)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Binding {
                fn from(n: $ty) -> Self {
                    Binding::Number(BigDecimal::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, u32, u64);

impl From<f64> for Binding {
    /// Goes through the shortest decimal text of the float, so `0.1` stays
    /// `0.1`. Non-finite floats are kept as text.
    fn from(n: f64) -> Self {
        let text = n.to_string();
        match number::parse(&text) {
            Some(decimal) if n.is_finite() => Binding::Number(decimal),
            _ => Binding::Str(text),
        }
    }
}

impl<T: Into<Binding>> From<Option<T>> for Binding {
    fn from(value: Option<T>) -> Self {
        value.map_or(Binding::Null, Into::into)
    }
}

impl<T: Into<Binding>> From<Vec<T>> for Binding {
    fn from(items: Vec<T>) -> Self {
        Binding::List(items.into_iter().map(Into::into).collect())
    }
}

/// The evaluation context: named inputs in insertion order.
///
/// Absent names resolve to the empty string, never to an error.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    entries: Vec<(String, Binding)>,
    index: HashMap<String, usize>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing an earlier binding in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Binding>) {
        let name = name.into();
        let value = value.into();
        match self.index.get(&name) {
            Some(&slot) => self.entries[slot].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    /// Builder form of [`Bindings::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Binding>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    /// Value of `name` for evaluation.
    pub fn resolve(&self, name: &str) -> Value {
        self.get(name)
            .map_or_else(|| Value::Str(String::new()), Binding::to_value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Bindings {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Into<String>, V: Into<Binding>> FromIterator<(K, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (name, value) in iter {
            bindings.insert(name, value);
        }
        bindings
    }
}
