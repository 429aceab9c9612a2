use crate::evaluator::{Arg, EvalError};
use crate::values::Value;

use super::{ArgContract, FunctionProvider};

/// Type-aware equality producing a boolean.
///
/// Values of different kinds are never equal, so `equals(5, '5')` is false
/// even though `5 = '5'` holds. Numbers compare by value, ignoring scale.
pub struct EqualsProvider;

impl FunctionProvider for EqualsProvider {
    fn name(&self) -> &'static str {
        "equals"
    }

    fn contract(&self) -> ArgContract {
        ArgContract::exact(2)
    }

    fn call(&self, args: &[Arg<'_>]) -> Result<Value, EvalError> {
        let left = args[0].eval()?;
        let right = args[1].eval()?;
        Ok(Value::Bool(typed_eq(&left, &right)))
    }
}

fn typed_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => l == r,
        (Value::Str(l), Value::Str(r)) => l == r,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::DateTime(l), Value::DateTime(r)) => l == r,
        (Value::Map(l), Value::Map(r)) => same_entries(l, r),
        (Value::Multi(l), Value::Multi(r)) => l == r,
        (Value::Empty, Value::Empty) => true,
        _ => false,
    }
}

/// Maps are equal when they hold the same pairs, in any order.
fn same_entries(left: &[(String, String)], right: &[(String, String)]) -> bool {
    left.len() == right.len() && left.iter().all(|entry| right.contains(entry))
}
