//! # 批量处理模块
//!
//! 提供从 glob 模式到并行转换作业的批量处理能力。
//!
//! ## 功能
//! - 展开 glob 模式，规划 (输入, 输出) 作业对
//! - 基于 rayon 的并行执行
//! - 进度反馈与失败汇总
//!
//! ## 依赖关系
//! - 被 `commands.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod planner;
pub mod runner;

pub use planner::{plan_jobs, ConversionJob};
pub use runner::{BatchRunner, ConversionOutcome, FailureReport};
