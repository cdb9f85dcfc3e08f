//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! imgbatch 是单一命令工具，不含子命令：两个位置参数
//! （glob 模式、目标格式）加少量可选开关。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands.rs`

use clap::Parser;
use std::path::PathBuf;

/// imgbatch - 并行批量图像格式转换
#[derive(Parser, Debug)]
#[command(name = "imgbatch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Converts multiple files in parallel using an external converter command",
    long_about = None
)]
pub struct Cli {
    /// Glob pattern selecting input files (quote it to avoid shell expansion)
    pub pattern: String,

    /// Target output format, used as the output file extension (e.g. png)
    pub format: String,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// External converter executable invoked as '<CONVERTER> <input> <output>'
    #[arg(long, default_value = "convert")]
    pub converter: String,

    /// Directory where converted files are written
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}
