//! 标准方言下的插值入口。
//!
//! 需要二进制安全或其他适配器规则时，改用 [`Flavor`] 或自定义的 [`Quoter`]。

use crate::flavor::{Flavor, InterpolateError};
use crate::quote::Quoter;
use crate::value::SqlValue;

/// 把 `template` 中的 `?` 依次替换为 `args` 的字面量。
///
/// ```
/// use halo_quoting::{escape, sql_values};
///
/// let sql = escape(
///     "SELECT * FROM zoos WHERE name = ? AND acreage > ?",
///     &sql_values!["Dallas", 40],
/// )
/// .unwrap();
/// assert_eq!(sql, "SELECT * FROM zoos WHERE name = 'Dallas' AND acreage > 40");
/// ```
pub fn escape(template: &str, args: &[SqlValue]) -> Result<String, InterpolateError> {
    Flavor::Standard.escape(template, args)
}

/// 单个值的 SQL 字面量。
pub fn quote(value: &SqlValue) -> Result<String, InterpolateError> {
    Flavor::Standard.quote(value)
}
