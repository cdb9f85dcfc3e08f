//! # 批量执行器
//!
//! 并行执行转换作业并汇总失败结果。
//!
//! ## 功能
//! - 基于 rayon 的固定大小线程池
//! - 进度条显示
//! - 失败收集与排序汇总
//!
//! ## 依赖关系
//! - 被 `commands.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行执行

use crate::batch::planner::ConversionJob;
use crate::utils::progress;

use rayon::prelude::*;

/// 单个作业的终态结果
///
/// 每个作业恰好产生一个结果；失败只记录输入路径，
/// 个别失败不会中断批次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// 转换成功（进程退出码为 0 且输出文件存在）
    Success,
    /// 转换失败（携带输入文件路径）
    Failed(String),
}

/// 批量处理结果汇总
#[derive(Debug, Default)]
pub struct FailureReport {
    /// 作业总数
    pub total: usize,
    /// 失败的输入文件路径，按字典序排列
    pub failures: Vec<String>,
}

impl FailureReport {
    /// 是否全部成功
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// 成功数量
    pub fn succeeded(&self) -> usize {
        self.total - self.failures.len()
    }

    /// 渲染失败列表：逗号加换行分隔
    pub fn render(&self) -> String {
        self.failures.join(",\n")
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行处理作业列表
    ///
    /// 作业完成顺序不确定；排序只发生在最终汇总。
    pub fn run<F>(&self, jobs: Vec<ConversionJob>, worker: F) -> FailureReport
    where
        F: Fn(&ConversionJob) -> ConversionOutcome + Sync + Send,
    {
        let total = jobs.len();
        let pb = progress::create_progress_bar(total as u64, "Converting");

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .unwrap();

        let outcomes: Vec<ConversionOutcome> = pool.install(|| {
            jobs.par_iter()
                .map(|job| {
                    let outcome = worker(job);
                    pb.inc(1);
                    outcome
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut failures: Vec<String> = outcomes
            .into_iter()
            .filter_map(|outcome| match outcome {
                ConversionOutcome::Success => None,
                ConversionOutcome::Failed(input) => Some(input),
            })
            .collect();
        failures.sort();

        FailureReport { total, failures }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn job(name: &str) -> ConversionJob {
        ConversionJob {
            input: PathBuf::from(format!("/in/{}", name)),
            output: PathBuf::from(format!("/out/{}", name)),
        }
    }

    #[test]
    fn test_run_all_success() {
        let runner = BatchRunner::new(2);
        let jobs = vec![job("a.bmp"), job("b.bmp"), job("c.bmp")];

        let report = runner.run(jobs, |_| ConversionOutcome::Success);

        assert_eq!(report.total, 3);
        assert_eq!(report.succeeded(), 3);
        assert!(report.is_clean());
        assert_eq!(report.render(), "");
    }

    #[test]
    fn test_run_collects_every_failure() {
        let runner = BatchRunner::new(4);
        let jobs = vec![job("a.bmp"), job("b.bmp"), job("c.bmp")];

        let report = runner.run(jobs, |j| {
            if j.input.ends_with("b.bmp") {
                ConversionOutcome::Failed(j.input.display().to_string())
            } else {
                ConversionOutcome::Success
            }
        });

        assert_eq!(report.total, 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failures, vec!["/in/b.bmp".to_string()]);
    }

    #[test]
    fn test_run_failures_sorted() {
        let runner = BatchRunner::new(2);
        // 提交顺序与字典序相反
        let jobs = vec![job("c.bmp"), job("b.bmp"), job("a.bmp")];

        let report = runner.run(jobs, |j| {
            ConversionOutcome::Failed(j.input.display().to_string())
        });

        assert_eq!(
            report.failures,
            vec![
                "/in/a.bmp".to_string(),
                "/in/b.bmp".to_string(),
                "/in/c.bmp".to_string(),
            ]
        );
        assert_eq!(report.render(), "/in/a.bmp,\n/in/b.bmp,\n/in/c.bmp");
    }

    #[test]
    fn test_run_empty_batch() {
        let runner = BatchRunner::new(1);
        let report = runner.run(vec![], |_| ConversionOutcome::Success);

        assert_eq!(report.total, 0);
        assert!(report.is_clean());
    }

    #[test]
    fn test_one_outcome_per_job() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let runner = BatchRunner::new(8);
        let jobs: Vec<ConversionJob> = (0..100).map(|i| job(&format!("{:03}.bmp", i))).collect();
        let calls = AtomicUsize::new(0);

        let report = runner.run(jobs, |j| {
            calls.fetch_add(1, Ordering::SeqCst);
            ConversionOutcome::Failed(j.input.display().to_string())
        });

        assert_eq!(calls.load(Ordering::SeqCst), 100);
        assert_eq!(report.total, 100);
        assert_eq!(report.failures.len(), 100);
    }
}
