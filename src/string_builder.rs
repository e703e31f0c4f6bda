//! 插值输出缓冲（对齐 go-sqlbuilder 的 stringBuilder 行为）。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            buf: String::with_capacity(n),
        }
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub(crate) fn write_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// 写入 `s`；如果不是本组的第一项，会先写入 `sep`。
    pub(crate) fn write_separated(&mut self, first: bool, sep: &str, s: &str) {
        if !first {
            self.buf.push_str(sep);
        }
        self.buf.push_str(s);
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}
