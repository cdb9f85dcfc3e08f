//! # 命令执行模块
//!
//! 实现主流程：规划作业 -> 并行执行 -> 汇总报告。
//!
//! 单个文件的失败只进入末尾的汇总报告，进程退出码始终为 0；
//! 只有非法 glob 模式会作为硬错误向上传播。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli.rs`, `batch/`, `converter.rs`, `utils/`

use crate::batch::{plan_jobs, BatchRunner};
use crate::cli::Cli;
use crate::converter::Converter;
use crate::error::Result;
use crate::utils::output;

/// 执行批量转换
pub fn execute(args: Cli) -> Result<()> {
    let jobs = plan_jobs(&args.pattern, &args.format, &args.output_dir)?;

    if jobs.is_empty() {
        output::print_warning(&format!("No files matched '{}'", args.pattern));
        return Ok(());
    }

    output::print_info(&format!("Found {} files to convert", jobs.len()));

    let converter = Converter::new(&args.converter);
    let runner = BatchRunner::new(args.jobs);
    let report = runner.run(jobs, |job| converter.convert(job));

    if report.is_clean() {
        output::print_done(&format!(
            "Converted {} file(s) to '{}'",
            report.succeeded(),
            args.format
        ));
    } else {
        output::print_done(&format!(
            "Converted {} of {} file(s) to '{}'",
            report.succeeded(),
            report.total,
            args.format
        ));
        // 失败列表走错误流，便于脚本捕获；退出码保持 0
        output::print_error(&format!(
            "Failed to process the following files:\n{}",
            report.render()
        ));
    }

    Ok(())
}
