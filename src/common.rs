//! 全局错误定义

use thiserror::Error;

// ── 错误 ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OlapError {
    #[error("dimension already exists: {0}")]
    DimensionAlreadyExists(String),
    #[error("dimension not found: {0}")]
    DimensionNotFound(String),
    #[error("element already exists: dimension={0} element={1}")]
    ElementAlreadyExists(String, String),
    #[error("element not found: dimension={0} element={1}")]
    ElementNotFound(String, String),
    #[error("component already exists: parent={0} child={1}")]
    ComponentAlreadyExists(String, String),
    #[error("component not found: dimension={0} element={1}")]
    ComponentNotFound(String, String),
    #[error("cell not found: cube={0} elements={1:?}")]
    CellNotFound(String, Vec<String>),
    #[error("operation canceled")]
    Canceled,
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl OlapError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DimensionNotFound(_)
                | Self::ElementNotFound(..)
                | Self::ComponentNotFound(..)
                | Self::CellNotFound(..)
        )
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            Self::DimensionAlreadyExists(_)
                | Self::ElementAlreadyExists(..)
                | Self::ComponentAlreadyExists(..)
        )
    }

    /// 调用方放弃（主动取消或超时）
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Canceled | Self::DeadlineExceeded)
    }
}

pub type Result<T> = std::result::Result<T, OlapError>;
