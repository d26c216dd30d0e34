//! 存储方法契约
//!
//! 上层查询 / 聚合层只依赖这个 trait。每个方法的第一个参数是取消信号，
//! 取消时返回 `OlapError::Canceled` 或 `OlapError::DeadlineExceeded`。

use async_trait::async_trait;
use crate::cancel::CancelToken;
use crate::common::Result;
use crate::meta::{Cell, Cube, Dimension, Element};

#[async_trait]
pub trait Storage: Send + Sync {
    // ── Cube ─────────────────────────────────────────────────────────────────

    /// 覆盖写，不返回 AlreadyExists
    async fn add_cube(&self, cx: &CancelToken, cube: Cube) -> Result<()>;

    /// 不存在时返回 `Cube::default()`
    async fn get_cube(&self, cx: &CancelToken, name: &str) -> Result<Cube>;

    async fn cube_exists(&self, cx: &CancelToken, name: &str) -> Result<bool>;

    // ── Dimension ────────────────────────────────────────────────────────────

    async fn add_dimension(&self, cx: &CancelToken, dim: Dimension) -> Result<()>;

    async fn get_dimension(&self, cx: &CancelToken, name: &str) -> Result<Dimension>;

    async fn dimension_exists(&self, cx: &CancelToken, name: &str) -> Result<bool>;

    // ── Element ──────────────────────────────────────────────────────────────

    async fn add_element(&self, cx: &CancelToken, el: Element) -> Result<()>;

    async fn get_element(&self, cx: &CancelToken, dim: &str, name: &str) -> Result<Element>;

    async fn element_exists(&self, cx: &CancelToken, dim: &str, name: &str) -> Result<bool>;

    // ── Component ────────────────────────────────────────────────────────────

    async fn add_component(&self, cx: &CancelToken, parent: Element, child: Element) -> Result<()>;

    async fn get_component(&self, cx: &CancelToken, dim: &str, name: &str) -> Result<Element>;

    async fn component_exists(&self, cx: &CancelToken, dim: &str, name: &str) -> Result<bool>;

    /// 直接子节点，按加入顺序
    async fn children(&self, cx: &CancelToken, dim: &str, name: &str) -> Result<Vec<Element>>;

    // ── Cell ─────────────────────────────────────────────────────────────────

    /// 覆盖写，不返回 AlreadyExists
    async fn add_cell(&self, cx: &CancelToken, cell: Cell) -> Result<()>;

    async fn get_cell(&self, cx: &CancelToken, cube: &str, elements: &[&str]) -> Result<Cell>;
}
