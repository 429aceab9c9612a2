//! Text and JSON reports of one evaluation.

use genexpr::Error;
use serde::Serialize;

use crate::email;

#[derive(Debug, Serialize, PartialEq)]
pub struct Generated {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Success {
    pub results: Vec<Generated>,
}

impl Success {
    pub fn new(values: Vec<String>, check_emails: bool) -> Self {
        let results = values
            .into_iter()
            .map(|value| Generated {
                valid: check_emails.then(|| email::is_valid(&value)),
                value,
            })
            .collect();
        Self { results }
    }

    pub fn to_text(&self) -> String {
        self.results
            .iter()
            .map(|generated| match generated.valid {
                Some(true) => format!("{}\tvalid", generated.value),
                Some(false) => format!("{}\tinvalid", generated.value),
                None => generated.value.clone(),
            })
            .map(|line| line + "\n")
            .collect()
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Failure {
    pub error: String,
    pub kind: &'static str,
    pub position: Option<usize>,
    pub function_name: Option<String>,
    pub suggestion: Option<String>,
}

impl Failure {
    pub fn new(error: &Error, suggestion: Option<&str>) -> Self {
        Self {
            error: error.to_string(),
            kind: error.kind().as_str(),
            position: error.position(),
            function_name: error.function_name().map(str::to_string),
            suggestion: suggestion.map(|name| format!("Did you mean '{name}'?")),
        }
    }
}
