//! Configuration options for the engine.

use crate::evaluator::EvaluatorOptions;
use crate::parser::DEFAULT_MAX_DEPTH;

/// Limits shared by parsing and evaluation.
///
/// # Example
///
/// ```
/// use genexpr_core::api::EngineOptions;
///
/// let options = EngineOptions { max_depth: 64 };
/// assert_eq!(EngineOptions::default().max_depth, 256);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum nesting of expressions, checked while parsing and again while
    /// evaluating.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl From<EngineOptions> for EvaluatorOptions {
    fn from(options: EngineOptions) -> Self {
        EvaluatorOptions {
            max_depth: options.max_depth,
        }
    }
}
