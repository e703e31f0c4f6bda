//! halo-quoting：把 `?` 占位符模板与宿主值内联成单条 SQL 的字面量引用引擎。
//!
//! 面向无法使用原生绑定参数的驱动；能用预编译参数时请优先使用预编译参数。

pub mod flavor;
pub mod interpolate;
#[cfg(test)]
mod interpolate_tests;
pub mod literal;
pub mod macros;
#[cfg(test)]
mod macros_tests;
pub mod quote;
mod string_builder;
pub mod value;

pub use crate::flavor::{Flavor, InterpolateError};
pub use crate::interpolate::{escape, quote};
pub use crate::literal::{HostValue, Raw, SqlLiteral, raw};
pub use crate::quote::{PLACEHOLDER, Quoter};
pub use crate::value::{SqlPattern, SqlValue};
