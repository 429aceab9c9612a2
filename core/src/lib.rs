//! Expression engine for generating strings from named inputs.
//!
//! An expression such as `zip(split(aliases, ','), '@', domain)` is lexed,
//! parsed into an [`Expr`](parser::Expr) tree and evaluated against
//! [`Bindings`](values::Bindings) into a [`Value`](values::Value) whose list
//! expansion is the set of generated strings.

pub mod api;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod stdlib;
pub mod values;

pub use api::{Engine, EngineOptions, Error, ErrorKind, Expression};
pub use values::{Binding, Bindings, Value};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_zip_broadcast() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
