//! Binary operator semantics.
//!
//! `&` concatenates first scalars, comparisons fall back from numeric to
//! boolean to lexicographic, and arithmetic requires both sides to read as
//! numbers.

use core::cmp::Ordering;

use num_traits::Zero;

use crate::parser::BinaryOp;
use crate::values::{Value, number};

use super::EvalError;

pub(super) fn eval_binary(
    op: BinaryOp,
    left: Value,
    right: Value,
    position: usize,
) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Concat => Ok(concat(&left, &right)),
        op if op.is_comparison() => compare(op, &left, &right, position),
        op => arithmetic(op, &left, &right, position),
    }
}

/// Absence propagates: `Empty`, or an empty list next to a multi-value,
/// makes the whole result `Empty`.
fn concat(left: &Value, right: &Value) -> Value {
    if matches!(left, Value::Empty) || matches!(right, Value::Empty) {
        return Value::Empty;
    }
    let involves_list = left.is_multi() || right.is_multi();
    if involves_list && (left.is_empty_list() || right.is_empty_list()) {
        return Value::Empty;
    }
    let mut out = left.first_or_empty().into_owned();
    out.push_str(&right.first_or_empty());
    Value::Str(out)
}

fn compare(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    position: usize,
) -> Result<Value, EvalError> {
    let (left_empty, right_empty) = (left.is_empty_list(), right.is_empty_list());
    if left_empty || right_empty {
        let both = left_empty && right_empty;
        return Ok(Value::Bool(match op {
            BinaryOp::Eq => both,
            BinaryOp::NotEq => !both,
            _ => false,
        }));
    }

    if let (Some(l), Some(r)) = (left.coerce_number(), right.coerce_number()) {
        return Ok(Value::Bool(ordering_matches(op, l.cmp(&r))));
    }

    if let (Value::Bool(l), Value::Bool(r)) = (left, right) {
        return match op {
            BinaryOp::Eq => Ok(Value::Bool(l == r)),
            BinaryOp::NotEq => Ok(Value::Bool(l != r)),
            _ => Err(unsupported(op, left, right, position)),
        };
    }

    let ordering = left.first_or_empty().cmp(&right.first_or_empty());
    Ok(Value::Bool(ordering_matches(op, ordering)))
}

fn ordering_matches(op: BinaryOp, ordering: Ordering) -> bool {
    match op {
        BinaryOp::Lt => ordering == Ordering::Less,
        BinaryOp::Gt => ordering == Ordering::Greater,
        BinaryOp::LtEq => ordering != Ordering::Greater,
        BinaryOp::GtEq => ordering != Ordering::Less,
        BinaryOp::Eq => ordering == Ordering::Equal,
        BinaryOp::NotEq => ordering != Ordering::Equal,
        _ => false,
    }
}

fn arithmetic(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    position: usize,
) -> Result<Value, EvalError> {
    let (Some(l), Some(r)) = (left.coerce_number(), right.coerce_number()) else {
        return Err(unsupported(op, left, right, position));
    };

    let result = match op {
        BinaryOp::Add => l + r,
        BinaryOp::Sub => l - r,
        BinaryOp::Mul => l * r,
        BinaryOp::Div => {
            if r.is_zero() {
                return Err(EvalError::DivisionByZero { position });
            }
            number::divide(&l, &r)
        }
        _ => return Err(unsupported(op, left, right, position)),
    };
    Ok(Value::Number(result))
}

fn unsupported(op: BinaryOp, left: &Value, right: &Value, position: usize) -> EvalError {
    EvalError::UnsupportedOperation {
        operator: op,
        left: left.data_type(),
        right: right.data_type(),
        position,
    }
}
