use crate::evaluator::{Arg, EvalError};
use crate::values::Value;

/// A named built-in callable from expressions.
///
/// Providers receive their arguments unevaluated and force each one with
/// [`Arg::eval`], so a provider may skip arguments it does not need.
pub trait FunctionProvider: Send + Sync {
    /// Name as written in expressions. Lookup ignores case.
    fn name(&self) -> &'static str;

    fn contract(&self) -> ArgContract;

    /// Called only after [`ArgContract::check`] accepted the argument count.
    fn call(&self, args: &[Arg<'_>]) -> Result<Value, EvalError>;
}

/// Accepted argument counts: `min..max` with an exclusive upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgContract {
    min: usize,
    max: Option<usize>,
}

impl ArgContract {
    pub const fn exact(count: usize) -> Self {
        Self {
            min: count,
            max: Some(count + 1),
        }
    }

    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Upper bound, exclusive.
    pub const fn less_than(self, bound: usize) -> Self {
        Self {
            min: self.min,
            max: Some(bound),
        }
    }

    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count < max)
    }

    /// Report a count outside the contract. `expected` is the violated
    /// bound: the minimum when too few, the largest accepted count when too
    /// many.
    pub fn check(&self, function: &str, actual: usize) -> Result<(), EvalError> {
        if self.accepts(actual) {
            return Ok(());
        }
        let expected = match self.max {
            Some(max) if actual >= max => max - 1,
            _ => self.min,
        };
        Err(EvalError::InvalidArgumentCount {
            function: function.to_string(),
            expected,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exact_contract() {
        let contract = ArgContract::exact(2);
        assert!(contract.accepts(2));
        assert!(!contract.accepts(1));
        assert!(!contract.accepts(3));
        assert_eq!(
            contract.check("split", 3),
            Err(EvalError::InvalidArgumentCount {
                function: "split".into(),
                expected: 2,
                actual: 3,
            })
        );
    }

    #[test]
    fn test_bounded_contract() {
        let contract = ArgContract::at_least(2).less_than(99);
        assert!(contract.accepts(98));
        assert_eq!(
            contract.check("zip", 1),
            Err(EvalError::InvalidArgumentCount {
                function: "zip".into(),
                expected: 2,
                actual: 1,
            })
        );
        assert_eq!(
            contract.check("zip", 99),
            Err(EvalError::InvalidArgumentCount {
                function: "zip".into(),
                expected: 98,
                actual: 99,
            })
        );
    }

    #[test]
    fn test_open_contract() {
        assert!(ArgContract::at_least(0).accepts(1000));
    }
}
