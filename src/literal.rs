//! SqlLiteral：让内置规则之外的类型自行提供 SQL 字面量。
//!
//! 返回的文本会原样拼入 SQL，引擎不再做任何转义；其安全性由实现方负责。

use crate::value::SqlValue;

/// 能直接给出完整 SQL 表达式的类型。
pub trait SqlLiteral {
    fn to_sql_literal(&self) -> String;
}

/// 内置 [`SqlValue`] 变体之外的宿主值。
///
/// 没有 [`SqlLiteral`] 能力的 `HostValue` 在引用时会得到 `UnsupportedKind` 错误。
pub trait HostValue: dyn_clone::DynClone + std::fmt::Debug + Send + Sync {
    /// 出现在错误信息里的类型名。
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_sql_literal(&self) -> Option<&dyn SqlLiteral> {
        None
    }
}

dyn_clone::clone_trait_object!(HostValue);

/// Raw：原样拼入 SQL 的片段，例如 `NOW()`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw {
    pub(crate) expr: String,
}

impl Raw {
    pub fn new(expr: impl Into<String>) -> Self {
        Self { expr: expr.into() }
    }
}

impl SqlLiteral for Raw {
    fn to_sql_literal(&self) -> String {
        self.expr.clone()
    }
}

impl HostValue for Raw {
    fn as_sql_literal(&self) -> Option<&dyn SqlLiteral> {
        Some(self)
    }
}

pub fn raw(expr: impl Into<String>) -> SqlValue {
    SqlValue::host(Raw::new(expr))
}
