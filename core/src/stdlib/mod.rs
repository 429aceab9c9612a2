//! Built-in functions and the registry that resolves them.
//!
//! | Function | Arity | Result |
//! |----------|-------|--------|
//! | `split(text, delimiter)` | 2 | list of pieces |
//! | `substring(text, start, end)` | 3 | 1-indexed inclusive slice |
//! | `zip(a, b, ...)` | 2..98 | index-wise concatenation |
//! | `cross_join(a, b, ...)` | 2..98 | cartesian concatenation |
//! | `equals(a, b)` | 2 | type-aware boolean |
//! | `date(format, value)` | 2 | ISO-8601 date-time |
//!
//! Names are matched case-insensitively: `SPLIT(...)` calls `split`.

mod date;
mod list;
mod logic;
mod provider;
mod registry;
mod string;


pub use date::DateProvider;
pub use list::{CrossJoinProvider, ZipProvider};
pub use logic::EqualsProvider;
pub use provider::{ArgContract, FunctionProvider};
pub use registry::{FunctionRegistry, RegistryBuilder, RegistryError};
pub use string::{SplitProvider, SubstringProvider};
