//! Dimension 注册表（仅插入语义，名字唯一）

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use parking_lot::RwLock;
use tracing::debug;
use crate::common::{OlapError, Result};
use crate::meta::Dimension;

pub struct DimensionRegistry {
    dimensions: RwLock<HashMap<String, Dimension>>,
}

impl DimensionRegistry {
    pub fn new() -> Self {
        Self { dimensions: RwLock::new(HashMap::new()) }
    }

    /// 同名维度已存在时报错，原值保持不变
    pub fn add_dimension(&self, dim: Dimension) -> Result<()> {
        let mut dims = self.dimensions.write();
        match dims.entry(dim.name.clone()) {
            Entry::Occupied(_) => Err(OlapError::DimensionAlreadyExists(dim.name)),
            Entry::Vacant(slot) => {
                debug!(dimension = %dim.name, "add dimension");
                slot.insert(dim);
                Ok(())
            }
        }
    }

    pub fn get_dimension(&self, name: &str) -> Result<Dimension> {
        self.dimensions
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| OlapError::DimensionNotFound(name.into()))
    }

    pub fn dimension_exists(&self, name: &str) -> bool {
        self.dimensions.read().contains_key(name)
    }

    pub fn dimension_count(&self) -> usize {
        self.dimensions.read().len()
    }
}

impl Default for DimensionRegistry {
    fn default() -> Self { Self::new() }
}
