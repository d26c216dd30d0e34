//! 复合键编码
//!
//! 每个分量编码为 `u64 BE 长度 + UTF-8 字节`，依次拼接。
//! 任意分量内容（包括分隔符类字符）都不会让两个不同的元组得到同一个键。
//!
//! ```text
//! join(["Sales", "UK", "2024"])
//!   = [len=5]Sales [len=2]UK [len=4]2024
//!   = join(["Sales"]) ++ join(["UK", "2024"])
//! ```

use byteorder::{BigEndian, ByteOrder};

const LEN_BYTES: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompositeKey(Vec<u8>);

impl CompositeKey {
    pub fn new() -> Self { Self(Vec::new()) }

    /// 一次性拼接全部分量
    pub fn join<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut key = Self::new();
        for p in parts {
            key.push(p.as_ref());
        }
        key
    }

    pub fn push(&mut self, part: &str) {
        let mut len = [0u8; LEN_BYTES];
        BigEndian::write_u64(&mut len, part.len() as u64);
        self.0.extend_from_slice(&len);
        self.0.extend_from_slice(part.as_bytes());
    }

    /// 追加一个已经编码好的键；结果与把两边分量平铺后 `join` 完全一致
    pub fn concat(mut self, tail: &CompositeKey) -> Self {
        self.0.extend_from_slice(&tail.0);
        self
    }

    /// (dimension, element) 身份键
    pub fn element(dimension: &str, name: &str) -> Self {
        Self::join([dimension, name])
    }

    /// (cube, 坐标元组) 键：先把坐标归约成一个 token，再接到 cube 名后面
    pub fn cell<I, S>(cube: &str, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let coords = Self::join(elements);
        Self::join([cube]).concat(&coords)
    }

    /// 按编码顺序还原各分量
    pub fn parts(&self) -> Vec<String> {
        let mut out = Vec::new();
        let mut pos = 0;
        while pos + LEN_BYTES <= self.0.len() {
            let len = BigEndian::read_u64(&self.0[pos..pos + LEN_BYTES]) as usize;
            pos += LEN_BYTES;
            let end = (pos + len).min(self.0.len());
            out.push(String::from_utf8_lossy(&self.0[pos..end]).into_owned());
            pos = end;
        }
        out
    }

    pub fn as_bytes(&self) -> &[u8] { &self.0 }
}

impl std::fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.parts().join("/"))
    }
}
