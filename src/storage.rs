//! 顶层存储门面
//!
//! 每次调用先按 [`CancelPolicy`] 处理取消信号，再分派到对应子存储。
//! 子存储之间互不调用，任何调用最多只持有一个子存储的锁。

use async_trait::async_trait;
use tracing::debug;
use crate::cancel::CancelToken;
use crate::cell::CellStore;
use crate::common::{OlapError, Result};
use crate::config::{CancelPolicy, EngineConfig};
use crate::contract::Storage;
use crate::cube::CubeRegistry;
use crate::dimension::DimensionRegistry;
use crate::element::ElementRegistry;
use crate::meta::{Cell, Cube, Dimension, Element};

/// 各子存储的记录数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorageStats {
    pub cubes:      usize,
    pub dimensions: usize,
    pub elements:   usize,
    /// 拥有子列表的父 element 数
    pub parents:    usize,
    pub cells:      usize,
}

/// 单进程内存存储引擎
pub struct MemoryStorage {
    config:     EngineConfig,
    cubes:      CubeRegistry,
    dimensions: DimensionRegistry,
    elements:   ElementRegistry,
    cells:      CellStore,
}

impl MemoryStorage {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            cubes:      CubeRegistry::new(),
            dimensions: DimensionRegistry::new(),
            elements:   ElementRegistry::new(),
            cells:      CellStore::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    /// 逐个子存储读取，不是一致快照
    pub fn stats(&self) -> StorageStats {
        StorageStats {
            cubes:      self.cubes.cube_count(),
            dimensions: self.dimensions.dimension_count(),
            elements:   self.elements.element_count(),
            parents:    self.elements.parent_count(),
            cells:      self.cells.cell_count(),
        }
    }

    /// 放行后存储访问一定完整执行；被拒绝时存储完全未被触碰
    async fn admit(&self, cx: &CancelToken, op: &'static str) -> Result<()> {
        let rejected = match self.config.cancel_policy {
            CancelPolicy::Immediate => cx.err(),
            CancelPolicy::SimulatedLatency { delay } => tokio::select! {
                biased;
                _ = cx.cancelled() => Some(cx.err().unwrap_or(OlapError::Canceled)),
                _ = tokio::time::sleep(delay) => None,
            },
        };
        match rejected {
            Some(err) => {
                debug!(op, error = %err, "call rejected before dispatch");
                Err(err)
            }
            None => Ok(()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self { Self::new(EngineConfig::default()) }
}

#[async_trait]
impl Storage for MemoryStorage {
    // ── Cube ─────────────────────────────────────────────────────────────────

    async fn add_cube(&self, cx: &CancelToken, cube: Cube) -> Result<()> {
        self.admit(cx, "add_cube").await?;
        self.cubes.add_cube(cube);
        Ok(())
    }

    async fn get_cube(&self, cx: &CancelToken, name: &str) -> Result<Cube> {
        self.admit(cx, "get_cube").await?;
        Ok(self.cubes.get_cube(name))
    }

    async fn cube_exists(&self, cx: &CancelToken, name: &str) -> Result<bool> {
        self.admit(cx, "cube_exists").await?;
        Ok(self.cubes.cube_exists(name))
    }

    // ── Dimension ────────────────────────────────────────────────────────────

    async fn add_dimension(&self, cx: &CancelToken, dim: Dimension) -> Result<()> {
        self.admit(cx, "add_dimension").await?;
        self.dimensions.add_dimension(dim)
    }

    async fn get_dimension(&self, cx: &CancelToken, name: &str) -> Result<Dimension> {
        self.admit(cx, "get_dimension").await?;
        self.dimensions.get_dimension(name)
    }

    async fn dimension_exists(&self, cx: &CancelToken, name: &str) -> Result<bool> {
        self.admit(cx, "dimension_exists").await?;
        Ok(self.dimensions.dimension_exists(name))
    }

    // ── Element ──────────────────────────────────────────────────────────────

    async fn add_element(&self, cx: &CancelToken, el: Element) -> Result<()> {
        self.admit(cx, "add_element").await?;
        self.elements.add_element(el)
    }

    async fn get_element(&self, cx: &CancelToken, dim: &str, name: &str) -> Result<Element> {
        self.admit(cx, "get_element").await?;
        self.elements.get_element(dim, name)
    }

    async fn element_exists(&self, cx: &CancelToken, dim: &str, name: &str) -> Result<bool> {
        self.admit(cx, "element_exists").await?;
        Ok(self.elements.element_exists(dim, name))
    }

    // ── Component ────────────────────────────────────────────────────────────

    async fn add_component(&self, cx: &CancelToken, parent: Element, child: Element) -> Result<()> {
        self.admit(cx, "add_component").await?;
        self.elements.add_component(&parent, &child)
    }

    async fn get_component(&self, cx: &CancelToken, dim: &str, name: &str) -> Result<Element> {
        self.admit(cx, "get_component").await?;
        self.elements.get_component(dim, name)
    }

    async fn component_exists(&self, cx: &CancelToken, dim: &str, name: &str) -> Result<bool> {
        self.admit(cx, "component_exists").await?;
        Ok(self.elements.component_exists(dim, name))
    }

    async fn children(&self, cx: &CancelToken, dim: &str, name: &str) -> Result<Vec<Element>> {
        self.admit(cx, "children").await?;
        self.elements.children(dim, name)
    }

    // ── Cell ─────────────────────────────────────────────────────────────────

    async fn add_cell(&self, cx: &CancelToken, cell: Cell) -> Result<()> {
        self.admit(cx, "add_cell").await?;
        self.cells.add_cell(cell);
        Ok(())
    }

    async fn get_cell(&self, cx: &CancelToken, cube: &str, elements: &[&str]) -> Result<Cell> {
        self.admit(cx, "get_cell").await?;
        self.cells.get_cell(cube, elements)
    }
}
