//! 引擎配置

use std::time::Duration;
use serde::{Deserialize, Serialize};

/// 每次调用在访问存储之前如何处理取消信号
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CancelPolicy {
    /// 只检查信号当前是否已取消
    #[default]
    Immediate,
    /// 信号与固定延迟赛跑，延迟先到才访问存储
    SimulatedLatency { delay: Duration },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub cancel_policy: CancelPolicy,
}

impl EngineConfig {
    pub fn immediate() -> Self {
        Self { cancel_policy: CancelPolicy::Immediate }
    }

    pub fn simulated_latency(delay: Duration) -> Self {
        Self { cancel_policy: CancelPolicy::SimulatedLatency { delay } }
    }
}
