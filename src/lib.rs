//! genexpr - generate strings from named inputs with a small expression
//! language
//!
//! # Overview
//!
//! An expression combines input bindings with operators and built-in
//! functions. Its result is a list of strings, so a single expression can
//! produce several candidates at once:
//!
//! - Email address generation from name parts
//! - Login or alias suggestions
//! - Label and display-name templates
//!
//! # Quick Start
//!
//! ```ignore
//! use genexpr::{Bindings, Engine, EngineOptions};
//!
//! let engine = Engine::new(EngineOptions::default())?;
//! let bindings = Bindings::new()
//!     .with("aliases", "jean,j,jeannot")
//!     .with("lastName", "Mignard")
//!     .with("domain", "peoplespheres.io");
//!
//! let emails = engine.generate("zip(split(aliases,','),'.',lastName,'@',domain)", &bindings)?;
//! assert_eq!(emails[0], "jean.Mignard@peoplespheres.io");
//! ```
//!
//! # Language
//!
//! | Form | Example |
//! |------|---------|
//! | String, number | `'text'`, `42`, `3.50` |
//! | Input | `firstName` (absent inputs read as `''`) |
//! | Concatenation | `first & '.' & last` |
//! | Arithmetic | `+ - * /` |
//! | Comparison | `< > <= >= = !=` |
//! | Conditional | `age >= 18 ? 'adult' : 'minor'` |
//! | Map literal | `greeting:'Hello', tone:formal` |
//! | Call | `split(text, ',')`, `substring(s, 1, 3)`, `zip(...)`, `cross_join(...)`, `equals(a, b)`, `date(fmt, value)` |
//!
//! # Errors
//!
//! Every failure is an [`Error`] with a [`kind`](Error::kind) tag and, where
//! it applies, a byte [`position`](Error::position) into the source. Use
//! [`render_error_to_string`] to show it against the expression text.

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from genexpr_core
pub use genexpr_core::api::{Engine, EngineOptions, Error, ErrorKind, Expression};

// Re-export commonly used types and values
pub use genexpr_core::stdlib::{ArgContract, FunctionProvider, FunctionRegistry, RegistryError};
pub use genexpr_core::values::{self, Binding, Bindings, DataType, Value};

// Re-export errors
pub use genexpr_core::evaluator::{Arg, EvalError};
pub use genexpr_core::parser::ParseError;
