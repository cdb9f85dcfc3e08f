//! # 外部转换命令调用
//!
//! 以 `<命令> <输入> <输出>` 形式调用外部转换工具，
//! 根据退出码和输出文件是否存在判定作业结果。
//!
//! ## 判定规则
//! - 进程无法启动或退出码非 0 -> 失败
//! - 退出码为 0 但输出文件不存在 -> 失败（防御退出 0 却不产出的工具）
//! - 其余情况 -> 成功
//!
//! 只检查输出文件存在性，不校验内容有效性。
//! 不解析 stdout/stderr，输出全部丢弃。
//!
//! ## 依赖关系
//! - 被 `commands.rs` 调用
//! - 使用 `batch/planner.rs` 的 `ConversionJob`
//! - 使用 `batch/runner.rs` 的 `ConversionOutcome`

use crate::batch::{ConversionJob, ConversionOutcome};

use std::process::{Command, Stdio};

/// 外部转换器封装
pub struct Converter {
    /// 转换命令名（如 `convert`、`magick`）
    command: String,
}

impl Converter {
    /// 创建新的转换器
    pub fn new(command: &str) -> Self {
        Self {
            command: command.to_string(),
        }
    }

    /// 执行单个转换作业，阻塞等待外部进程退出
    pub fn convert(&self, job: &ConversionJob) -> ConversionOutcome {
        let status = Command::new(&self.command)
            .arg(&job.input)
            .arg(&job.output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => {
                if job.output.is_file() {
                    ConversionOutcome::Success
                } else {
                    ConversionOutcome::Failed(job.input.display().to_string())
                }
            }
            // 非 0 退出或无法启动（命令缺失、权限不足）同样记为失败
            _ => ConversionOutcome::Failed(job.input.display().to_string()),
        }
    }
}
