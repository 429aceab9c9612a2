use core::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("valid integer pattern"));
static DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+\.[0-9]+$").expect("valid decimal pattern"));
static MAP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^:,]+:[^:,]+(,\s*[^:,]+:[^:,]+)*$").expect("valid map pattern")
});

/// Inferred type of a value or of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    String,
    Integer,
    Decimal,
    Boolean,
    DateTime,
    List,
    Map,
    Unknown,
}

impl DataType {
    pub fn name(self) -> &'static str {
        match self {
            DataType::String => "STRING",
            DataType::Integer => "INTEGER",
            DataType::Decimal => "DECIMAL",
            DataType::Boolean => "BOOLEAN",
            DataType::DateTime => "DATETIME",
            DataType::List => "LIST",
            DataType::Map => "MAP",
            DataType::Unknown => "UNKNOWN",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, DataType::Integer | DataType::Decimal)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify text, checking boolean, integer, decimal and map shapes in that
/// order before falling back to string.
pub fn infer_type(text: &str) -> DataType {
    if is_boolean(text) {
        DataType::Boolean
    } else if is_integer(text) {
        DataType::Integer
    } else if is_decimal(text) {
        DataType::Decimal
    } else if is_map_text(text) {
        DataType::Map
    } else {
        DataType::String
    }
}

/// Optional minus sign followed by ASCII digits.
pub fn is_integer(text: &str) -> bool {
    INTEGER_REGEX.is_match(text)
}

/// Optional minus sign, digits, a dot, digits.
pub fn is_decimal(text: &str) -> bool {
    DECIMAL_REGEX.is_match(text)
}

pub fn is_boolean(text: &str) -> bool {
    text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false")
}

/// `key:value` pairs separated by commas, e.g. `a:1, b:2`.
pub fn is_map_text(text: &str) -> bool {
    MAP_REGEX.is_match(text)
}
