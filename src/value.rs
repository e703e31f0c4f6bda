//! 宿主值类型：插值时每个 `?` 消费一个 `SqlValue`。

use crate::literal::HostValue;
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::ops::RangeInclusive;

/// 参与插值的宿主值。
///
/// 变体的声明顺序即 [`Quoter::quote`](crate::quote::Quoter::quote) 的分派顺序，
/// `Host` 永远最后检查。
#[derive(Debug, Clone)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    String(Cow<'static, str>),
    /// 符号值，按字符串引用。
    Symbol(Cow<'static, str>),
    /// 带 UTC 偏移的时间戳。
    DateTime(time::OffsetDateTime),
    /// 不带时区的日期时间，按自身文本原样加引号。
    LocalDateTime(time::PrimitiveDateTime),
    Date(time::Date),
    /// 区间：`first AND last`，用于 `BETWEEN ?`。
    Range(Box<SqlValue>, Box<SqlValue>),
    /// 集合：`(a, b, c)`。
    List(Vec<SqlValue>),
    Pattern(SqlPattern),
    Bytes(Vec<u8>),
    /// 类型标识，值为完整路径名。
    TypeName(Cow<'static, str>),
    /// 内置类型之外的值，见 [`HostValue`]。
    Host(Box<dyn HostValue>),
}

/// 正则值，按模式源文本引用。
#[derive(Debug, Clone)]
pub struct SqlPattern(pub regex::Regex);

impl SqlPattern {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for SqlPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl SqlValue {
    /// 将 `Option<T>` 映射为 `SqlValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<SqlValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    /// 由任意可转换元素构造集合。
    pub fn list<T: Into<SqlValue>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn range(first: impl Into<SqlValue>, last: impl Into<SqlValue>) -> Self {
        Self::Range(Box::new(first.into()), Box::new(last.into()))
    }

    pub fn symbol(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Symbol(name.into())
    }

    /// 以 `T` 的完整类型路径构造类型标识值。
    pub fn type_of<T: ?Sized>() -> Self {
        Self::TypeName(Cow::Borrowed(std::any::type_name::<T>()))
    }

    pub fn host(v: impl HostValue + 'static) -> Self {
        Self::Host(Box::new(v))
    }

    /// 变体名，用于错误信息。
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I64(_) => "i64",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Decimal(_) => "decimal",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::DateTime(_) => "datetime",
            Self::LocalDateTime(_) => "local datetime",
            Self::Date(_) => "date",
            Self::Range(..) => "range",
            Self::List(_) => "list",
            Self::Pattern(_) => "pattern",
            Self::Bytes(_) => "bytes",
            Self::TypeName(_) => "type name",
            Self::Host(v) => v.kind(),
        }
    }
}

impl PartialEq for SqlValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a == b,
            (Self::F64(a), Self::F64(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::LocalDateTime(a), Self::LocalDateTime(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Range(af, al), Self::Range(bf, bl)) => af == bf && al == bl,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::TypeName(a), Self::TypeName(b)) => a == b,
            (Self::Host(_), _) | (_, Self::Host(_)) => false,
            _ => false,
        }
    }
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for SqlValue {
                fn from(v: $t) -> Self {
                    Self::$variant(<$wide>::from(v))
                }
            }
        )+
    };
}

impl_from_int!(I64, i64: i8, i16, i32, i64);
impl_from_int!(U64, u64: u8, u16, u32, u64);

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<Decimal> for SqlValue {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for SqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<Vec<SqlValue>> for SqlValue {
    fn from(v: Vec<SqlValue>) -> Self {
        Self::List(v)
    }
}

impl<T: Into<SqlValue>> From<RangeInclusive<T>> for SqlValue {
    fn from(v: RangeInclusive<T>) -> Self {
        let (first, last) = v.into_inner();
        Self::range(first, last)
    }
}

impl From<time::OffsetDateTime> for SqlValue {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<time::PrimitiveDateTime> for SqlValue {
    fn from(v: time::PrimitiveDateTime) -> Self {
        Self::LocalDateTime(v)
    }
}

impl From<time::Date> for SqlValue {
    fn from(v: time::Date) -> Self {
        Self::Date(v)
    }
}

impl From<regex::Regex> for SqlValue {
    fn from(v: regex::Regex) -> Self {
        Self::Pattern(SqlPattern(v))
    }
}
