use miette::Diagnostic;
use thiserror::Error;

/// Failures of the command line itself, before any expression runs.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("At least one dynamic input parameter (e.g., 'lastName=doe') is required.")]
    #[diagnostic(
        code(genexpr::missing_inputs),
        help("pass -i name=value or --json FILE")
    )]
    MissingInputs,

    #[error("The 'expression' parameter must not be empty.")]
    #[diagnostic(code(genexpr::empty_expression))]
    EmptyExpression,

    #[error("Could not read inputs from '{path}'")]
    #[diagnostic(code(genexpr::io))]
    ReadInputs {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Inputs in '{path}' are not valid JSON")]
    #[diagnostic(code(genexpr::json))]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON inputs must be an object of named values, found {found}")]
    #[diagnostic(code(genexpr::json))]
    JsonNotObject { found: &'static str },
}
