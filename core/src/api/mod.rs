//! Public API for evaluating generator expressions.
//!
//! An [`Engine`] owns everything that is built once: the lexer rule table,
//! the grammar and the function registry. Expressions are parsed on every
//! call unless the caller keeps the [`Expression`] returned by
//! [`Engine::parse`].
//!
//! # Example
//!
//! ```ignore
//! use genexpr_core::api::{Engine, EngineOptions};
//! use genexpr_core::values::Bindings;
//!
//! let engine = Engine::new(EngineOptions::default())?;
//! let bindings = Bindings::new()
//!     .with("firstName", "Alice")
//!     .with("lastName", "Smith")
//!     .with("domain", "example.com");
//!
//! let results = engine.generate(
//!     "substring(firstName,1,1) & lastName & '@' & domain",
//!     &bindings,
//! )?;
//! assert_eq!(results, ["ASmith@example.com"]);
//! ```

pub mod engine;
pub mod error;
pub mod expression;
pub mod options;

pub use engine::Engine;
pub use error::{Error, ErrorKind};
pub use expression::Expression;
pub use options::EngineOptions;
