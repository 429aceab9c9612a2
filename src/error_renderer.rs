//! Source-annotated error rendering using ariadne
//!
//! Errors that carry a byte position are drawn as a report pointing into the
//! expression text. Errors without one render as a single line.

use crate::Error;
use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;
use std::ops::Range;

const SOURCE_ID: &str = "<expression>";

/// Render an error against its expression source to stderr
///
/// # Example
/// ```no_run
/// use genexpr::{Bindings, Engine, EngineOptions, render_error};
///
/// let engine = Engine::new(EngineOptions::default()).unwrap();
/// let source = "split(name ',')";
/// if let Err(e) = engine.generate(source, &Bindings::new()) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &Error, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, source: &str, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String (useful for logs and UIs)
pub fn render_error_to_string(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let Some(position) = error.position() else {
        return writeln!(writer, "Error [{}]: {}", error.kind(), error);
    };

    let span = highlight(source, position);
    let message = error.to_string();
    let config = Config::default()
        .with_color(use_color)
        .with_index_type(IndexType::Byte);

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_code(error.kind().as_str())
        .with_message(&message)
        .with_config(config)
        .with_label(Label::new((SOURCE_ID, span)).with_message(label_text(error)));

    if let Some(name) = error.function_name() {
        report = report.with_note(format!("in function '{name}'"));
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}

/// The character at `position`, or an empty span at the end of input.
fn highlight(source: &str, position: usize) -> Range<usize> {
    let start = position.min(source.len());
    let width = source
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    start..start + width
}

fn label_text(error: &Error) -> String {
    match error.arity() {
        Some((expected, actual)) => format!("expected {expected} argument(s), found {actual}"),
        None => error.kind().as_str().to_lowercase().replace('_', " "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bindings, Engine, EngineOptions};

    fn fail(source: &str) -> Error {
        let engine = Engine::new(EngineOptions::default()).unwrap();
        engine
            .generate(source, &Bindings::new())
            .expect_err("expression should fail")
    }

    #[test]
    fn test_render_parse_error() {
        let source = "first & & last";
        let output = render_error_to_string_no_color(&fail(source), source);

        assert!(output.contains("INVALID_TOKEN_PLACEMENT"));
        assert!(output.contains(source));
        assert!(output.contains("cannot be used in this position"));
    }

    #[test]
    fn test_render_eval_error_names_function() {
        let source = "splitt(name, ',')";
        let output = render_error_to_string_no_color(&fail(source), source);

        assert!(output.contains("Unknown function 'splitt'"));
        assert!(output.contains("in function 'splitt'"));
    }

    #[test]
    fn test_render_without_position_is_one_line() {
        let source = "split('a')";
        let output = render_error_to_string_no_color(&fail(source), source);

        assert_eq!(
            output,
            "Error [INVALID_ARGUMENT_COUNT]: Function 'split' requires 2 argument(s) but received 1\n"
        );
    }

    #[test]
    fn test_highlight_spans() {
        assert_eq!(highlight("a & b", 2), 2..3);
        assert_eq!(highlight("'é' #", 5), 5..6);
        assert_eq!(highlight("é#", 0), 0..2);
        assert_eq!(highlight("abc", 3), 3..3);
        assert_eq!(highlight("abc", 10), 3..3);
    }
}
