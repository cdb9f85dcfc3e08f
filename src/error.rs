//! # 统一错误处理模块
//!
//! 定义 imgbatch 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个文件的转换失败不走这里：按设计它们只进入最终的失败汇总，
//! 不会中断整个批次。这里只收集能让程序提前终止的硬错误。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// imgbatch 统一错误类型
#[derive(Error, Debug)]
pub enum ImgbatchError {
    #[error("Invalid glob pattern: {pattern}\nReason: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to resolve current working directory")]
    CurrentDirError {
        #[source]
        source: std::io::Error,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ImgbatchError>;
