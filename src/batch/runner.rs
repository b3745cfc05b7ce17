//! # 批量执行器
//!
//! 顺序执行批量处理任务。
//!
//! ## 功能
//! - 逐个文件处理，前一个文件的读写完成后才开始下一个
//! - 处理前将路径打印到标准输出（每行一个）
//! - 进度条显示
//! - 失败策略：遇错即停 / 继续并汇总
//!
//! ## 依赖关系
//! - 被 `transcode/mod.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 打印路径与错误

use crate::error::Result;
use crate::utils::{output, progress};

use std::path::{Path, PathBuf};

/// 单个文件处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// 已重写为 UTF-8 + BOM（dry run 时表示"将被重写"）
    Rewritten,
    /// 已带 BOM，未改动
    Skipped,
}

/// 失败策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// 第一个错误即终止整个批次，已重写的文件保持不变
    #[default]
    Abort,
    /// 记录错误并继续处理剩余文件
    Continue,
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 重写数量
    pub rewritten: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情 (文件路径, 错误信息)
    pub failures: Vec<(PathBuf, String)>,
}

impl BatchResult {
    /// 记录处理结果
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Rewritten => self.rewritten += 1,
            FileOutcome::Skipped => self.skipped += 1,
        }
    }

    /// 记录失败
    pub fn record_failure(&mut self, path: &Path, message: String) {
        self.failed += 1;
        self.failures.push((path.to_path_buf(), message));
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.rewritten + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 失败策略
    policy: FailurePolicy,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    /// 按顺序处理文件列表
    ///
    /// `Abort` 策略下返回第一个错误，之前已处理的文件不回滚。
    pub fn run<F>(&self, files: &[PathBuf], mut processor: F) -> Result<BatchResult>
    where
        F: FnMut(&Path) -> Result<FileOutcome>,
    {
        let pb = progress::create_progress_bar(files.len() as u64, "Processing");
        let mut batch_result = BatchResult::default();

        for file in files {
            pb.suspend(|| output::print_path(file));

            match processor(file) {
                Ok(outcome) => batch_result.record(outcome),
                Err(e) => match self.policy {
                    FailurePolicy::Abort => {
                        pb.abandon();
                        return Err(e);
                    }
                    FailurePolicy::Continue => {
                        pb.suspend(|| {
                            output::print_error(&format!("{}: {}", file.display(), e));
                        });
                        batch_result.record_failure(file, e.to_string());
                    }
                },
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(batch_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Utf8BomError;

    fn files(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    fn fail_on_b(path: &Path) -> Result<FileOutcome> {
        match path.to_str() {
            Some("a.cpp") => Ok(FileOutcome::Rewritten),
            Some("b.cpp") => Err(Utf8BomError::DecodeError {
                path: "b.cpp".to_string(),
                encoding: "Shift_JIS".to_string(),
            }),
            _ => Ok(FileOutcome::Skipped),
        }
    }

    #[test]
    fn test_run_counts_outcomes() {
        let runner = BatchRunner::new(FailurePolicy::Abort);
        let result = runner
            .run(&files(&["a.cpp", "c.cpp", "d.cpp"]), fail_on_b)
            .unwrap();
        assert_eq!(result.rewritten, 1);
        assert_eq!(result.skipped, 2);
        assert_eq!(result.failed, 0);
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn test_abort_stops_at_first_error() {
        let runner = BatchRunner::new(FailurePolicy::Abort);
        let mut visited = Vec::new();
        let err = runner
            .run(&files(&["a.cpp", "b.cpp", "c.cpp"]), |p| {
                visited.push(p.to_path_buf());
                fail_on_b(p)
            })
            .unwrap_err();
        assert!(matches!(err, Utf8BomError::DecodeError { .. }));
        assert_eq!(visited, files(&["a.cpp", "b.cpp"]));
    }

    #[test]
    fn test_continue_collects_failures() {
        let runner = BatchRunner::new(FailurePolicy::Continue);
        let result = runner
            .run(&files(&["a.cpp", "b.cpp", "c.cpp"]), fail_on_b)
            .unwrap();
        assert_eq!(result.rewritten, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failed, 1);
        assert_eq!(result.failures[0].0, PathBuf::from("b.cpp"));
        assert!(result.failures[0].1.contains("Shift_JIS"));
    }

    #[test]
    fn test_empty_file_list() {
        let runner = BatchRunner::new(FailurePolicy::default());
        let result = runner.run(&[], fail_on_b).unwrap();
        assert_eq!(result.total(), 0);
    }
}
