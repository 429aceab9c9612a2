use tracing::trace;

use crate::parser::{DEFAULT_MAX_DEPTH, Expr, Literal};
use crate::stdlib::FunctionRegistry;
use crate::values::{Bindings, Value};

use super::EvalError;
use super::operators;

/// Limits applied while evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Maximum nesting of node evaluations.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Reentrant interpreter. Holds only shared, read-only state.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'r> {
    registry: &'r FunctionRegistry,
    options: EvaluatorOptions,
}

impl<'r> Evaluator<'r> {
    pub fn new(registry: &'r FunctionRegistry, options: EvaluatorOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'r FunctionRegistry {
        self.registry
    }

    pub fn evaluate(&self, expr: &Expr, bindings: &Bindings) -> Result<Value, EvalError> {
        self.eval_expr(expr, bindings, 0)
    }

    pub(crate) fn eval_expr(
        &self,
        expr: &Expr,
        bindings: &Bindings,
        depth: usize,
    ) -> Result<Value, EvalError> {
        if depth >= self.options.max_depth {
            return Err(EvalError::MaxDepthExceeded {
                max_depth: self.options.max_depth,
            });
        }

        match expr {
            Expr::Literal { value, .. } => Ok(match value {
                Literal::Str(s) => Value::Str(s.clone()),
                Literal::Number(n) => Value::Number(n.clone()),
            }),
            Expr::Identifier { name, .. } => {
                let value = bindings.resolve(name);
                trace!(name = %name, data_type = %value.data_type(), "resolved identifier");
                Ok(value)
            }
            Expr::Map { entries, .. } => Ok(Value::Map(entries.clone())),
            Expr::Call {
                name,
                position,
                args,
            } => self.eval_call(name, *position, args, bindings, depth),
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => match self.eval_expr(condition, bindings, depth + 1)? {
                Value::Bool(true) => self.eval_expr(then_branch, bindings, depth + 1),
                Value::Bool(false) => self.eval_expr(else_branch, bindings, depth + 1),
                other => Err(EvalError::InvalidConditionType {
                    found: other.data_type(),
                    position: condition.position(),
                }),
            },
            Expr::Binary { .. } => self.eval_binary_chain(expr, bindings, depth),
        }
    }

    /// Walks the left spine of a binary chain without recursing, so
    /// `a & b & c & ...` costs one level of depth however long it is.
    fn eval_binary_chain(
        &self,
        expr: &Expr,
        bindings: &Bindings,
        depth: usize,
    ) -> Result<Value, EvalError> {
        let mut spine = Vec::new();
        let mut base = expr;
        while let Expr::Binary {
            op,
            left,
            right,
            position,
        } = base
        {
            spine.push((*op, right.as_ref(), *position));
            base = left.as_ref();
        }

        let mut acc = self.eval_expr(base, bindings, depth + 1)?;
        for (op, right, position) in spine.into_iter().rev() {
            let right = self.eval_expr(right, bindings, depth + 1)?;
            trace!(
                op = %op,
                left = %acc.data_type(),
                right = %right.data_type(),
                "binary operation"
            );
            acc = operators::eval_binary(op, acc, right, position)?;
        }
        Ok(acc)
    }

    fn eval_call(
        &self,
        name: &str,
        position: usize,
        args: &[Expr],
        bindings: &Bindings,
        depth: usize,
    ) -> Result<Value, EvalError> {
        let provider = self
            .registry
            .get(name)
            .ok_or_else(|| EvalError::UnknownFunction {
                name: name.to_string(),
                position,
            })?;
        provider.contract().check(provider.name(), args.len())?;

        let args: Vec<Arg<'_>> = args
            .iter()
            .map(|expr| Arg {
                evaluator: self,
                expr,
                bindings,
                depth: depth + 1,
            })
            .collect();

        trace!(function = provider.name(), argc = args.len(), "calling function");
        provider.call(&args)
    }
}

/// A function argument bound to its evaluation context but not yet
/// evaluated. Providers decide whether and when to force it.
#[derive(Clone, Copy)]
pub struct Arg<'e> {
    evaluator: &'e Evaluator<'e>,
    expr: &'e Expr,
    bindings: &'e Bindings,
    depth: usize,
}

impl<'e> Arg<'e> {
    pub fn eval(&self) -> Result<Value, EvalError> {
        self.evaluator.eval_expr(self.expr, self.bindings, self.depth)
    }

    pub fn expr(&self) -> &'e Expr {
        self.expr
    }

    pub fn position(&self) -> usize {
        self.expr.position()
    }
}

impl core::fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Arg")
            .field("expr", &self.expr.to_string())
            .field("depth", &self.depth)
            .finish()
    }
}
