mod bindings;
mod email;
mod error;
mod normalize;
mod output;
mod suggest;

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use genexpr::{Bindings, Engine, ErrorKind, render_error};
use miette::{IntoDiagnostic, Result};
use tracing::{debug, info};

use crate::error::CliError;
use crate::output::{Failure, Success};

/// genexpr - Generate strings from an expression and named inputs
#[derive(Parser, Debug)]
#[command(name = "genexpr")]
#[command(about = "Evaluate string-generation expressions", long_about = None)]
struct Args {
    /// Input binding as NAME=VALUE (repeatable)
    #[arg(short = 'i', long = "input", value_name = "NAME=VALUE", value_parser = bindings::parse_pair)]
    inputs: Vec<(String, String)>,

    /// JSON object whose fields become inputs
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Turn spaces between operands back into '+' (for URL-decoded text)
    #[arg(long)]
    normalize: bool,

    /// Flag each result as a valid or invalid email address
    #[arg(long)]
    check_emails: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the parsed AST (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Expression to evaluate (if not provided, reads one per line from stdin)
    expression: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Evaluate one expression and report it. Returns whether it succeeded.
fn interpret_input(engine: &Engine, input: &str, bindings: &Bindings, args: &Args) -> Result<bool> {
    let source = if args.normalize {
        normalize::normalize(input)
    } else {
        input.to_string()
    };

    let outcome = engine.parse(&source).and_then(|parsed| {
        if args.debug_parse {
            eprintln!("=== Parsed AST ===");
            eprintln!("{}", parsed.ast());
            eprintln!();
        }
        parsed.run(bindings)
    });

    let mut stdout = std::io::stdout().lock();
    match outcome {
        Ok(values) => {
            info!(count = values.len(), "generated results");
            let success = Success::new(values, args.check_emails);
            match args.format {
                Format::Text => write!(stdout, "{}", success.to_text()).into_diagnostic()?,
                Format::Json => {
                    serde_json::to_writer(&mut stdout, &success).into_diagnostic()?;
                    writeln!(stdout).into_diagnostic()?;
                }
            }
            Ok(true)
        }
        Err(err) => {
            debug!(kind = %err.kind(), "expression failed");
            let suggestion = match (err.kind(), err.function_name()) {
                (ErrorKind::UnknownFunction, Some(name)) => {
                    suggest::did_you_mean(name, engine.registry().names())
                }
                _ => None,
            };
            match args.format {
                Format::Text => {
                    render_error(&err, &source);
                    if let Some(name) = suggestion {
                        eprintln!("help: Did you mean '{name}'?");
                    }
                }
                Format::Json => {
                    serde_json::to_writer(&mut stdout, &Failure::new(&err, suggestion))
                        .into_diagnostic()?;
                    writeln!(stdout).into_diagnostic()?;
                }
            }
            Ok(false)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // GENEXPR_LOG, then RUST_LOG, then WARN
    let filter = EnvFilter::try_from_env("GENEXPR_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let bindings = bindings::collect(&args.inputs, args.json.as_deref())?;
    if bindings.is_empty() {
        return Err(CliError::MissingInputs.into());
    }

    let engine = Engine::global().into_diagnostic()?;
    let mut failures = 0usize;

    if let Some(expression) = &args.expression {
        if expression.trim().is_empty() {
            return Err(CliError::EmptyExpression.into());
        }
        if !interpret_input(engine, expression, &bindings, &args)? {
            failures += 1;
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.into_diagnostic()?;
            if line.trim().is_empty() {
                continue;
            }
            if !interpret_input(engine, &line, &bindings, &args)? {
                failures += 1;
            }
        }
    }

    if failures > 0 {
        debug!(failures, "finished with failures");
        std::process::exit(1);
    }
    Ok(())
}
