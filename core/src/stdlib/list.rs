//! Multi-value combinators: `zip` and `cross_join`.

use crate::evaluator::{Arg, EvalError};
use crate::values::Value;

use super::{ArgContract, FunctionProvider};

/// Both combinators take between 2 and 98 arguments.
const VARIADIC: ArgContract = ArgContract::at_least(2).less_than(99);

/// Index-wise concatenation. Scalars broadcast, multi-values truncate to
/// the shortest.
pub struct ZipProvider;

impl FunctionProvider for ZipProvider {
    fn name(&self) -> &'static str {
        "zip"
    }

    fn contract(&self) -> ArgContract {
        VARIADIC
    }

    fn call(&self, args: &[Arg<'_>]) -> Result<Value, EvalError> {
        let columns = args
            .iter()
            .map(|arg| {
                let value = arg.eval()?;
                Ok(Column {
                    multi: value.is_multi(),
                    values: value.as_list(),
                })
            })
            .collect::<Result<Vec<_>, EvalError>>()?;

        let multi: Vec<&Column> = columns.iter().filter(|c| c.multi).collect();
        if multi.is_empty() {
            return Ok(Value::Str(columns.iter().map(Column::scalar).collect()));
        }
        if multi.iter().any(|c| c.values.is_empty()) {
            return Ok(Value::Empty);
        }

        let rows = multi.iter().map(|c| c.values.len()).min().unwrap_or(0);
        let zipped: Vec<String> = (0..rows)
            .map(|row| {
                columns
                    .iter()
                    .map(|c| if c.multi { c.values[row].as_str() } else { c.scalar() })
                    .collect()
            })
            .collect();
        Ok(Value::Multi(zipped))
    }
}

struct Column {
    multi: bool,
    values: Vec<String>,
}

impl Column {
    fn scalar(&self) -> &str {
        self.values.first().map_or("", String::as_str)
    }
}

/// Cartesian product of every argument's list, leftmost argument major.
pub struct CrossJoinProvider;

impl FunctionProvider for CrossJoinProvider {
    fn name(&self) -> &'static str {
        "cross_join"
    }

    fn contract(&self) -> ArgContract {
        VARIADIC
    }

    fn call(&self, args: &[Arg<'_>]) -> Result<Value, EvalError> {
        let mut prefixes = vec![String::new()];
        for arg in args {
            let values = arg.eval()?.as_list();
            if values.is_empty() {
                return Ok(Value::Empty);
            }
            prefixes = prefixes
                .iter()
                .flat_map(|prefix| values.iter().map(move |value| format!("{prefix}{value}")))
                .collect();
        }
        Ok(Value::Multi(prefixes))
    }
}
