//! Quoter：把单个宿主值转成 SQL 字面量，并驱动 `?` 模板的插值。
//!
//! 安全警告：插值永远不如预编译参数安全；本实现仅用于兼容不支持参数化的驱动。

use crate::flavor::InterpolateError;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

/// 模板中的占位符。引号内的 `?` 同样会被当作占位符。
pub const PLACEHOLDER: char = '?';

/// 值引用规则。
///
/// 所有方法都有标准实现；适配器只需覆盖自己需要不同写法的那几种类型，
/// 分派（[`quote`](Quoter::quote)）与插值（[`escape`](Quoter::escape)）会自动使用覆盖后的规则。
pub trait Quoter {
    /// 出现在日志里的名字。
    fn name(&self) -> &'static str {
        "custom"
    }

    /// 依次把 `template` 中每个占位符替换为 `args` 中对应值的字面量。
    ///
    /// 占位符个数与 `args.len()` 不一致时返回 `BindingMismatch`，不会返回部分结果。
    fn escape(&self, template: &str, args: &[SqlValue]) -> Result<String, InterpolateError> {
        let mut out = StringBuilder::with_capacity(template.len() + args.len() * 20);
        let mut remaining = args.iter();
        let mut expected = 0usize;
        let mut mismatch = false;

        for c in template.chars() {
            if c != PLACEHOLDER {
                out.write_char(c);
                continue;
            }

            expected += 1;
            match remaining.next() {
                Some(v) => out.write_str(&self.quote(v)?),
                // 继续扫描，拿到真实的占位符个数
                None => mismatch = true,
            }
        }

        if mismatch || remaining.next().is_some() {
            tracing::debug!(supplied = args.len(), expected, "binding mismatch");
            return Err(InterpolateError::BindingMismatch {
                supplied: args.len(),
                expected,
            });
        }

        tracing::trace!(
            quoter = self.name(),
            placeholders = expected,
            len = out.len(),
            "interpolated"
        );
        Ok(out.into_string())
    }

    /// 按类型分派到对应的字面量规则。
    fn quote(&self, value: &SqlValue) -> Result<String, InterpolateError> {
        let s = match value {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Bool(b) => self.quote_bool(*b),
            SqlValue::I64(n) => n.to_string(),
            SqlValue::U64(n) => n.to_string(),
            SqlValue::F32(n) if n.is_finite() => n.to_string(),
            SqlValue::F32(n) => return Err(InterpolateError::unsupported("f32", n)),
            SqlValue::F64(n) => self.quote_float(*n)?,
            SqlValue::Decimal(d) => d.to_string(),
            SqlValue::String(s) | SqlValue::Symbol(s) | SqlValue::TypeName(s) => {
                self.quote_string(s)
            }
            SqlValue::DateTime(dt) => self.quote_datetime(dt),
            SqlValue::LocalDateTime(dt) => self.quote_local_datetime(dt),
            SqlValue::Date(d) => self.quote_date(d),
            SqlValue::Range(first, last) => self.quote_range(first, last)?,
            SqlValue::List(items) => self.quote_list(items)?,
            SqlValue::Pattern(p) => self.quote_string(p.as_str()),
            SqlValue::Bytes(b) => self.quote_bytes(b),
            SqlValue::Host(v) => match v.as_sql_literal() {
                Some(lit) => lit.to_sql_literal(),
                None => return Err(InterpolateError::unsupported(v.kind(), v)),
            },
        };
        Ok(s)
    }

    /// `'...'`，内部的单引号写成两个；不做反斜杠转义。
    fn quote_string(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('\'');
        for ch in s.chars() {
            if ch == '\'' {
                out.push('\'');
            }
            out.push(ch);
        }
        out.push('\'');
        out
    }

    fn quote_bool(&self, b: bool) -> String {
        (if b { "TRUE" } else { "FALSE" }).to_string()
    }

    /// NaN 与无穷没有 SQL 数值字面量。
    fn quote_float(&self, n: f64) -> Result<String, InterpolateError> {
        if n.is_finite() {
            Ok(n.to_string())
        } else {
            Err(InterpolateError::unsupported("f64", &n))
        }
    }

    /// 标准规则把字节按文本引用；需要二进制安全的适配器应覆盖此方法。
    fn quote_bytes(&self, data: &[u8]) -> String {
        self.quote_string(&String::from_utf8_lossy(data))
    }

    /// `'YYYY-MM-DDTHH:MM:SS[.ffffff](Z|±HH:MM)'`，微秒截断而非四舍五入。
    fn quote_datetime(&self, dt: &time::OffsetDateTime) -> String {
        let mut out = format!(
            "'{}-{:02}-{:02}T{:02}:{:02}:{:02}",
            year_text(dt.year()),
            u8::from(dt.month()),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second()
        );

        let micros = dt.microsecond();
        if micros > 0 {
            out.push_str(&format!(".{micros:06}"));
        }

        let offset = dt.offset().whole_seconds();
        if offset == 0 {
            out.push('Z');
        } else {
            let sign = if offset > 0 { '+' } else { '-' };
            let abs = offset.unsigned_abs();
            out.push_str(&format!("{sign}{:02}:{:02}", abs / 3600, abs % 3600 / 60));
        }

        out.push('\'');
        out
    }

    fn quote_local_datetime(&self, dt: &time::PrimitiveDateTime) -> String {
        format!("'{dt}'")
    }

    fn quote_date(&self, d: &time::Date) -> String {
        format!(
            "'{}-{:02}-{:02}'",
            year_text(d.year()),
            u8::from(d.month()),
            d.day()
        )
    }

    /// `first AND last`，供 `BETWEEN ?` 使用。
    fn quote_range(&self, first: &SqlValue, last: &SqlValue) -> Result<String, InterpolateError> {
        Ok(format!("{} AND {}", self.quote(first)?, self.quote(last)?))
    }

    fn quote_list(&self, items: &[SqlValue]) -> Result<String, InterpolateError> {
        let mut out = StringBuilder::with_capacity(items.len() * 8 + 2);
        out.write_char('(');
        for (i, item) in items.iter().enumerate() {
            out.write_separated(i == 0, ", ", &self.quote(item)?);
        }
        out.write_char(')');
        Ok(out.into_string())
    }
}

/// 四位年份；负数年份在符号后补零（`-0001`）。
fn year_text(year: i32) -> String {
    if year < 0 {
        format!("-{:04}", year.unsigned_abs())
    } else {
        format!("{year:04}")
    }
}
