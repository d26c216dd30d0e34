//! Cube / Dimension / Element / Cell 记录
//!
//! 引擎只关心各记录的身份字段，其余内容按调用方给出的原样保存。

use serde::{Deserialize, Serialize};

// ── Cube ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    pub name:       String,
    /// 维度顺序即 Cell 坐标顺序
    pub dimensions: Vec<String>,
}

impl Cube {
    pub fn new(name: &str, dimensions: &[&str]) -> Self {
        Self {
            name:       name.into(),
            dimensions: dimensions.iter().map(|d| d.to_string()).collect(),
        }
    }
}

// ── Dimension ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
}

impl Dimension {
    pub fn new(name: &str) -> Self { Self { name: name.into() } }
}

// ── Element ───────────────────────────────────────────────────────────────────

/// 维度成员。父子关系不在这里保存，见 `element::ElementRegistry`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    pub dimension: String,
    pub name:      String,
}

impl Element {
    pub fn new(dimension: &str, name: &str) -> Self {
        Self { dimension: dimension.into(), name: name.into() }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.dimension, self.name)
    }
}

// ── Cell ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub cube:     String,
    /// 每个维度一个 element 名，顺序有意义
    pub elements: Vec<String>,
    pub value:    f64,
}

impl Cell {
    pub fn new(cube: &str, elements: &[&str], value: f64) -> Self {
        Self {
            cube:     cube.into(),
            elements: elements.iter().map(|e| e.to_string()).collect(),
            value,
        }
    }
}
