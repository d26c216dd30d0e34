//! # olap-cube-store
//!
//! OLAP 多维模型的内存存储层：Cube / Dimension / Element 层级 / 稀疏 Cell。
//! 只负责按精确键存取，不做汇总、合并计算或查询规划。
//!
//! ## 整体架构
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │              MemoryStorage  (impl contract::Storage)             │
//! │          CancelPolicy: Immediate | SimulatedLatency              │
//! │                                                                  │
//! │  ┌──────────────┐ ┌───────────────────┐ ┌─────────────────┐      │
//! │  │ CubeRegistry │ │ DimensionRegistry │ │ ElementRegistry │      │
//! │  │  overwrite   │ │   insert-only     │ │ elements        │      │
//! │  └──────────────┘ └───────────────────┘ │ components      │      │
//! │                                         └────────┬────────┘      │
//! │  ┌──────────────┐                                │               │
//! │  │  CellStore   │────────── CompositeKey ────────┘               │
//! │  │  overwrite   │     (length-prefixed parts)                    │
//! │  └──────────────┘                                                │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! 每个子存储各持一把 RwLock，子存储之间互不调用。

pub mod common;
pub mod meta;
pub mod key;
pub mod config;
pub mod cancel;

// ── 子存储 ────────────────────────────────────────────────────────────────────
pub mod cube;
pub mod dimension;
pub mod element;
pub mod cell;

// ── 门面 ──────────────────────────────────────────────────────────────────────
pub mod contract;
pub mod storage;
