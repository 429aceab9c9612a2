//! The expression engine.

use once_cell::sync::OnceCell;
use tracing::debug;

use super::{EngineOptions, Error, Expression};
use crate::lexer::Lexer;
use crate::parser::{self, Grammar};
use crate::stdlib::FunctionRegistry;
use crate::values::{Bindings, Value};

static GLOBAL: OnceCell<Engine> = OnceCell::new();

/// Lexer, grammar and function registry, built once and shared.
///
/// Nothing in an engine changes after construction, so a single instance
/// serves any number of threads without locking.
///
/// # Example
///
/// ```ignore
/// use genexpr_core::api::{Engine, EngineOptions};
/// use genexpr_core::values::Bindings;
///
/// let engine = Engine::new(EngineOptions::default())?;
/// let bindings = Bindings::new().with("aliases", "jean,j").with("domain", "x.io");
/// let emails = engine.generate("zip(split(aliases, ','), '@', domain)", &bindings)?;
/// assert_eq!(emails, ["jean@x.io", "j@x.io"]);
/// ```
#[derive(Debug)]
pub struct Engine {
    lexer: Lexer,
    grammar: Grammar,
    registry: FunctionRegistry,
    options: EngineOptions,
}

impl Engine {
    /// Engine with the standard grammar and the built-in functions.
    ///
    /// Fails only if the function registry cannot be assembled.
    pub fn new(options: EngineOptions) -> Result<Self, Error> {
        Ok(Self::with_registry(options, FunctionRegistry::builtin()?))
    }

    /// Engine with the standard grammar and a caller-supplied registry.
    pub fn with_registry(options: EngineOptions, registry: FunctionRegistry) -> Self {
        debug!(
            max_depth = options.max_depth,
            functions = registry.len(),
            "engine created"
        );
        Self {
            lexer: Lexer::default(),
            grammar: Grammar::default(),
            registry,
            options,
        }
    }

    /// Process-wide engine with default options, built on first use.
    pub fn global() -> Result<&'static Engine, Error> {
        GLOBAL.get_or_try_init(|| Engine::new(EngineOptions::default()))
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Parse `source` without evaluating it.
    pub fn parse(&self, source: &str) -> Result<Expression<'_>, Error> {
        let root = parser::parse_with(&self.lexer, &self.grammar, source, self.options.max_depth)?;
        debug!(source, "parsed expression");
        Ok(Expression::new(self, source, root))
    }

    /// Parse and evaluate `source` in one step.
    pub fn evaluate(&self, source: &str, bindings: &Bindings) -> Result<Value, Error> {
        self.parse(source)?.evaluate(bindings)
    }

    /// Parse, evaluate and expand `source` to output strings.
    pub fn generate(&self, source: &str, bindings: &Bindings) -> Result<Vec<String>, Error> {
        self.parse(source)?.run(bindings)
    }
}
