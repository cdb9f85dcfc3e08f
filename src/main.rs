//! # imgbatch - 并行批量图像格式转换工具
//!
//! 调用外部命令行转换工具（默认 ImageMagick 的 `convert`），
//! 对 glob 模式匹配到的每个文件并行执行一次转换，最后汇总失败文件列表。
//!
//! ## 用法
//! ```text
//! imgbatch '*.bmp' png
//! ```
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli.rs        (命令行参数定义)
//!   ├── commands.rs   (命令执行逻辑)
//!   │     ├── batch/       (作业规划与并行执行)
//!   │     └── converter.rs (外部转换命令调用)
//!   ├── utils/       (工具函数)
//!   └── error.rs     (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod converter;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
