//! Cell 存储：(cube, 坐标元组) → Cell，覆盖写语义

use std::collections::HashMap;
use parking_lot::RwLock;
use tracing::{debug, trace};
use crate::common::{OlapError, Result};
use crate::key::CompositeKey;
use crate::meta::Cell;

pub struct CellStore {
    cells: RwLock<HashMap<CompositeKey, Cell>>,
}

impl CellStore {
    pub fn new() -> Self {
        Self { cells: RwLock::new(HashMap::new()) }
    }

    /// 相同 (cube, 坐标) 的旧值被替换
    pub fn add_cell(&self, cell: Cell) {
        let key = CompositeKey::cell(&cell.cube, &cell.elements);
        debug!(key = %key, value = cell.value, "add cell");
        self.cells.write().insert(key, cell);
    }

    /// 坐标顺序有意义，必须与写入时一致
    pub fn get_cell<S: AsRef<str>>(&self, cube: &str, elements: &[S]) -> Result<Cell> {
        let key = CompositeKey::cell(cube, elements);
        trace!(key = %key, "get cell");
        self.cells.read().get(&key).cloned().ok_or_else(|| {
            OlapError::CellNotFound(
                cube.into(),
                elements.iter().map(|e| e.as_ref().to_string()).collect(),
            )
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cells.read().len()
    }
}

impl Default for CellStore {
    fn default() -> Self { Self::new() }
}
