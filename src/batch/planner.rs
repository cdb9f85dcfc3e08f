//! # 作业规划器
//!
//! 展开 glob 模式并为每个匹配文件生成一个转换作业。
//!
//! ## 功能
//! - glob 模式展开（委托给 `glob` crate）
//! - 输入/输出路径绝对化（词法拼接，不解析符号链接）
//! - 输出路径推导：`<output_dir>/<文件主名>.<目标格式>`
//!
//! ## 依赖关系
//! - 被 `commands.rs` 调用
//! - 使用 `glob` crate

use crate::error::{ImgbatchError, Result};

use std::env;
use std::path::{Path, PathBuf};

/// 单个转换作业：一对绝对路径，规划后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// 输入文件的绝对路径
    pub input: PathBuf,
    /// 期望输出文件的绝对路径
    pub output: PathBuf,
}

/// 展开 glob 模式，为每个匹配文件规划一个转换作业
///
/// 不检查输出文件是否已存在；同名文件由外部转换工具覆盖。
/// 遍历过程中不可读的条目被跳过。
pub fn plan_jobs(pattern: &str, format: &str, output_dir: &Path) -> Result<Vec<ConversionJob>> {
    let entries = glob::glob(pattern).map_err(|e| ImgbatchError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    let cwd = env::current_dir().map_err(|e| ImgbatchError::CurrentDirError { source: e })?;

    let mut jobs = Vec::new();
    for path in entries.filter_map(|e| e.ok()) {
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };

        let input = absolutize(&path, &cwd);
        let output = absolutize(&output_dir.join(format!("{}.{}", stem, format)), &cwd);
        jobs.push(ConversionJob { input, output });
    }

    Ok(jobs)
}

/// 词法绝对化：相对路径拼接到 cwd，不要求文件存在
fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
