//! Cube 注册表（覆盖写语义）

use std::collections::HashMap;
use parking_lot::RwLock;
use tracing::debug;
use crate::meta::Cube;

pub struct CubeRegistry {
    cubes: RwLock<HashMap<String, Cube>>,
}

impl CubeRegistry {
    pub fn new() -> Self {
        Self { cubes: RwLock::new(HashMap::new()) }
    }

    /// 同名 cube 直接覆盖，不报错
    pub fn add_cube(&self, cube: Cube) {
        debug!(cube = %cube.name, "add cube");
        self.cubes.write().insert(cube.name.clone(), cube);
    }

    /// 不存在时返回 `Cube::default()`；需要区分时用 [`Self::cube_exists`]
    pub fn get_cube(&self, name: &str) -> Cube {
        self.cubes.read().get(name).cloned().unwrap_or_default()
    }

    pub fn cube_exists(&self, name: &str) -> bool {
        self.cubes.read().contains_key(name)
    }

    pub fn cube_count(&self) -> usize {
        self.cubes.read().len()
    }
}

impl Default for CubeRegistry {
    fn default() -> Self { Self::new() }
}
