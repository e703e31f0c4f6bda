//! SQL Flavor（方言）：决定二进制、布尔等需要适配器覆盖的字面量写法。

use crate::quote::Quoter;
use std::fmt;

/// 内置方言。除 `Standard` 外，各方言只覆盖自己需要的少数规则，其余沿用标准写法。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    Standard,
    MySQL,
    PostgreSQL,
    SQLite,
    SQLServer,
    ClickHouse,
    Presto,
    Oracle,
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InterpolateError {
    #[error("binding mismatch: {supplied} args supplied for {expected} placeholders")]
    BindingMismatch { supplied: usize, expected: usize },
    #[error("don't know how to quote {kind}: {value}")]
    UnsupportedKind { kind: String, value: String },
}

impl InterpolateError {
    pub(crate) fn unsupported(kind: &str, value: &impl fmt::Debug) -> Self {
        tracing::debug!(kind, "no quoting rule for value");
        Self::UnsupportedKind {
            kind: kind.to_string(),
            value: format!("{value:?}"),
        }
    }
}

impl Quoter for Flavor {
    fn quote_bool(&self, b: bool) -> String {
        match self {
            Self::Oracle => (if b { "1" } else { "0" }).to_string(),
            _ => (if b { "TRUE" } else { "FALSE" }).to_string(),
        }
    }

    fn quote_bytes(&self, data: &[u8]) -> String {
        let (prefix, suffix) = match self {
            Self::Standard => return self.quote_string(&String::from_utf8_lossy(data)),
            Self::MySQL | Self::SQLite => ("X'", "'"),
            Self::PostgreSQL => ("E'\\\\x", "'::bytea"),
            Self::SQLServer => ("0x", ""),
            Self::ClickHouse => ("unhex('", "')"),
            Self::Presto => ("from_hex('", "')"),
            Self::Oracle => ("hextoraw('", "')"),
        };

        let mut out = String::with_capacity(prefix.len() + data.len() * 2 + suffix.len());
        out.push_str(prefix);
        push_hex(&mut out, data);
        out.push_str(suffix);
        out
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::MySQL => "MySQL",
            Self::PostgreSQL => "PostgreSQL",
            Self::SQLite => "SQLite",
            Self::SQLServer => "SQLServer",
            Self::ClickHouse => "ClickHouse",
            Self::Presto => "Presto",
            Self::Oracle => "Oracle",
        }
    }
}

fn push_hex(out: &mut String, data: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for &b in data {
        out.push(HEX[((b >> 4) & 0xF) as usize] as char);
        out.push(HEX[(b & 0xF) as usize] as char);
    }
}
