//! Parsed expressions bound to an engine.

use tracing::debug;

use super::{Engine, Error};
use crate::evaluator::Evaluator;
use crate::parser::Expr;
use crate::values::{Bindings, Value};

/// An expression parsed once and evaluated any number of times.
///
/// Borrows the [`Engine`] it was parsed by, so it always runs against the
/// same registry and limits.
///
/// # Example
///
/// ```ignore
/// let expr = engine.parse("first & '.' & last")?;
/// for (first, last) in [("ada", "lovelace"), ("alan", "turing")] {
///     let bindings = Bindings::new().with("first", first).with("last", last);
///     println!("{:?}", expr.run(&bindings)?);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Expression<'e> {
    engine: &'e Engine,
    source: String,
    root: Expr,
}

impl<'e> Expression<'e> {
    pub(crate) fn new(engine: &'e Engine, source: &str, root: Expr) -> Self {
        Self {
            engine,
            source: source.to_string(),
            root,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ast(&self) -> &Expr {
        &self.root
    }

    /// Evaluate to a [`Value`].
    pub fn evaluate(&self, bindings: &Bindings) -> Result<Value, Error> {
        let evaluator = Evaluator::new(self.engine.registry(), self.engine.options().into());
        let value = evaluator.evaluate(&self.root, bindings)?;
        debug!(
            source = %self.source,
            data_type = %value.data_type(),
            "evaluated expression"
        );
        Ok(value)
    }

    /// Evaluate and expand to output strings.
    pub fn run(&self, bindings: &Bindings) -> Result<Vec<String>, Error> {
        let results = self.evaluate(bindings)?.as_list();
        debug!(source = %self.source, results = results.len(), "generated results");
        Ok(results)
    }
}
