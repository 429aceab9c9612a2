//! Tree-walking interpreter over the parsed [`Expr`] tree.
//!
//! The evaluation context ([`Bindings`]) is an explicit argument of every
//! node evaluation, never ambient state, so one [`Evaluator`] can be shared
//! by any number of threads evaluating at once.
//!
//! ## Design Principles
//!
//! - **Never panic**: adversarial inputs produce an [`EvalError`]
//! - **Stack-safe**: depth tracking bounds recursion on deeply nested trees
//! - **Lazy arguments**: function providers receive unevaluated [`Arg`]s
//!
//! ## Example
//!
//! ```ignore
//! use genexpr_core::{evaluator, parser, stdlib::FunctionRegistry, values::Bindings};
//!
//! let registry = FunctionRegistry::builtin()?;
//! let expr = parser::parse("first & '.' & last")?;
//! let bindings = Bindings::new().with("first", "ada").with("last", "lovelace");
//! let value = evaluator::eval(&registry, &expr, &bindings)?;
//! assert_eq!(value.as_list(), vec!["ada.lovelace"]);
//! ```

mod error;
mod eval;
mod operators;


pub use error::EvalError;
pub use eval::{Arg, Evaluator, EvaluatorOptions};

use crate::{parser::Expr, stdlib::FunctionRegistry, values::{Bindings, Value}};

/// Evaluate `expr` against `bindings` with default limits.
pub fn eval(
    registry: &FunctionRegistry,
    expr: &Expr,
    bindings: &Bindings,
) -> Result<Value, EvalError> {
    Evaluator::new(registry, EvaluatorOptions::default()).evaluate(expr, bindings)
}
