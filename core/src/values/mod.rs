//! The value model shared by the parser, evaluator and function providers.
//!
//! [`Value`] is what evaluating an expression produces, [`Binding`] is what
//! callers feed in, and [`DataType`] classifies both.

mod binding;
mod data_type;
pub mod number;
mod value;

pub use binding::{Binding, Bindings};
pub use data_type::{DataType, infer_type, is_boolean, is_decimal, is_integer, is_map_text};
pub use value::Value;

#[cfg(test)]
mod value_test;
