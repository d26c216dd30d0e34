//! Element 注册表 + 父子层级（component）关系
//!
//! 两张表共用一把锁：
//!
//! ```text
//! elements   : key(dim, name)   → Element
//! components : key(dim, parent) → [key(dim, child), ...]   插入顺序，无重复
//! ```
//!
//! 层级只记录直接子节点；完整子树由调用方递归 `children` 获得。
//! 从未做过父节点的 element 在 `components` 中没有条目，
//! 这与“有条目但子列表为空”是两种不同状态。

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use parking_lot::RwLock;
use tracing::{debug, trace};
use crate::common::{OlapError, Result};
use crate::key::CompositeKey;
use crate::meta::Element;

#[derive(Default)]
struct ElementTables {
    elements:   HashMap<CompositeKey, Element>,
    components: HashMap<CompositeKey, Vec<CompositeKey>>,
}

pub struct ElementRegistry {
    inner: RwLock<ElementTables>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self { inner: RwLock::new(ElementTables::default()) }
    }

    // ── Element ──────────────────────────────────────────────────────────────

    pub fn add_element(&self, el: Element) -> Result<()> {
        let key = CompositeKey::element(&el.dimension, &el.name);
        let mut inner = self.inner.write();
        match inner.elements.entry(key) {
            Entry::Occupied(_) => Err(OlapError::ElementAlreadyExists(el.dimension, el.name)),
            Entry::Vacant(slot) => {
                debug!(element = %el, "add element");
                slot.insert(el);
                Ok(())
            }
        }
    }

    pub fn get_element(&self, dim: &str, name: &str) -> Result<Element> {
        let key = CompositeKey::element(dim, name);
        self.inner
            .read()
            .elements
            .get(&key)
            .cloned()
            .ok_or_else(|| OlapError::ElementNotFound(dim.into(), name.into()))
    }

    pub fn element_exists(&self, dim: &str, name: &str) -> bool {
        let key = CompositeKey::element(dim, name);
        self.inner.read().elements.contains_key(&key)
    }

    // ── Component（父子边）────────────────────────────────────────────────────

    /// 追加一条 parent → child 边。
    ///
    /// 查重与追加在同一次写锁内完成；父节点的子列表在第一条边时创建。
    /// 两端 element 是否已注册不做检查。
    pub fn add_component(&self, parent: &Element, child: &Element) -> Result<()> {
        let parent_key = CompositeKey::element(&parent.dimension, &parent.name);
        let child_key  = CompositeKey::element(&child.dimension, &child.name);

        let mut inner = self.inner.write();
        let children = inner.components.entry(parent_key).or_default();
        if children.contains(&child_key) {
            return Err(OlapError::ComponentAlreadyExists(parent.to_string(), child.to_string()));
        }
        children.push(child_key);
        debug!(parent = %parent, child = %child, "add component");
        Ok(())
    }

    /// 该 element 是否曾作为父节点出现过
    pub fn component_exists(&self, dim: &str, name: &str) -> bool {
        let key = CompositeKey::element(dim, name);
        self.inner.read().components.contains_key(&key)
    }

    /// 返回已知父节点自身的 element 记录
    pub fn get_component(&self, dim: &str, name: &str) -> Result<Element> {
        let key = CompositeKey::element(dim, name);
        let inner = self.inner.read();
        if !inner.components.contains_key(&key) {
            return Err(OlapError::ComponentNotFound(dim.into(), name.into()));
        }
        inner
            .elements
            .get(&key)
            .cloned()
            .ok_or_else(|| OlapError::ElementNotFound(dim.into(), name.into()))
    }

    /// 直接子节点，按加入顺序；记录缺失的子节点被跳过
    pub fn children(&self, dim: &str, name: &str) -> Result<Vec<Element>> {
        let key = CompositeKey::element(dim, name);
        let inner = self.inner.read();
        let child_keys = inner
            .components
            .get(&key)
            .ok_or_else(|| OlapError::ComponentNotFound(dim.into(), name.into()))?;

        let children: Vec<Element> = child_keys
            .iter()
            .filter_map(|k| inner.elements.get(k).cloned())
            .collect();
        trace!(parent = %key, count = children.len(), "children");
        Ok(children)
    }

    // ── 统计 ─────────────────────────────────────────────────────────────────

    pub fn element_count(&self) -> usize {
        self.inner.read().elements.len()
    }

    /// 拥有子列表的父节点数
    pub fn parent_count(&self) -> usize {
        self.inner.read().components.len()
    }
}

impl Default for ElementRegistry {
    fn default() -> Self { Self::new() }
}
