//! Text functions: `split` and `substring`.
//!
//! Positions and lengths count Unicode code points, never bytes.

use num_bigint::{BigInt, Sign};

use crate::evaluator::{Arg, EvalError};
use crate::values::{Value, number};

use super::{ArgContract, FunctionProvider};

// ============================================================================
// split(text, delimiter)
// ============================================================================

/// Literal split that keeps empty segments. An empty delimiter splits into
/// code points.
pub struct SplitProvider;

impl FunctionProvider for SplitProvider {
    fn name(&self) -> &'static str {
        "split"
    }

    fn contract(&self) -> ArgContract {
        ArgContract::exact(2)
    }

    fn call(&self, args: &[Arg<'_>]) -> Result<Value, EvalError> {
        let input = args[0].eval()?;
        let Some(text) = input.first_scalar().filter(|text| !text.is_empty()) else {
            return Ok(Value::Empty);
        };
        let delimiter = args[1].eval()?;
        let delimiter = delimiter.first_or_empty();

        let pieces: Vec<String> = if delimiter.is_empty() {
            text.chars().map(String::from).collect()
        } else {
            text.split(&*delimiter).map(String::from).collect()
        };
        Ok(Value::Multi(pieces))
    }
}

// ============================================================================
// substring(text, start, end)
// ============================================================================

/// 1-indexed, inclusive on both ends, clamped to the text.
pub struct SubstringProvider;

impl FunctionProvider for SubstringProvider {
    fn name(&self) -> &'static str {
        "substring"
    }

    fn contract(&self) -> ArgContract {
        ArgContract::exact(3)
    }

    fn call(&self, args: &[Arg<'_>]) -> Result<Value, EvalError> {
        let input = args[0].eval()?;
        let Some(text) = input.first_scalar().filter(|text| !text.is_empty()) else {
            return Ok(Value::Empty);
        };
        let start = self.position_arg(&args[1], "start")?;
        let end = self.position_arg(&args[2], "end")?;

        let len = text.chars().count() as i64;
        let start = start.max(1);
        let end = end.min(len);
        if end < start {
            return Ok(Value::str(""));
        }

        let slice: String = text
            .chars()
            .skip((start - 1) as usize)
            .take((end - start + 1) as usize)
            .collect();
        Ok(Value::Str(slice))
    }
}

impl SubstringProvider {
    fn position_arg(&self, arg: &Arg<'_>, label: &str) -> Result<i64, EvalError> {
        let value = arg.eval()?;
        let text = value.first_or_empty();
        let parsed = number::parse(text.trim())
            .and_then(|n| number::to_bigint(&n))
            .map(|n| saturate(&n));
        parsed.ok_or_else(|| EvalError::InvalidArgumentType {
            function: self.name().to_string(),
            message: format!("{label} must be an integer, got '{text}'"),
        })
    }
}

/// Out-of-range positions still clamp to the text.
fn saturate(n: &BigInt) -> i64 {
    i64::try_from(n).unwrap_or(match n.sign() {
        Sign::Minus => i64::MIN,
        _ => i64::MAX,
    })
}
