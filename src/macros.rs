//! 宏集合：以可变参数形式构造插值参数列表，免去逐个 `SqlValue::from`。

/// 把任意可转换为 `SqlValue` 的表达式收集成 `Vec<SqlValue>`。
///
/// ```
/// use halo_quoting::{SqlValue, sql_values};
///
/// let args = sql_values!["Dallas", 40, ()];
/// assert_eq!(args, vec![SqlValue::from("Dallas"), SqlValue::I64(40), SqlValue::Null]);
/// ```
#[macro_export]
macro_rules! sql_values {
    () => {
        Vec::<$crate::SqlValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::SqlValue::from($value)),+]
    };
}
