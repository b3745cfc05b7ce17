//! # 重编码模块
//!
//! 将目录树下匹配的旧式编码文件批量重写为 UTF-8 + BOM。
//!
//! ## 流程
//! 1. `FileCollector` 收集匹配文件
//! 2. `BatchRunner` 顺序处理，处理前打印路径
//! 3. `reencode_file` 完成单文件检查与重写
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `batch/`
//! - 子模块: bom, codepage, reencode

pub mod bom;
pub mod codepage;
pub mod reencode;

pub use codepage::LegacyCodePage;

use crate::batch::{BatchResult, BatchRunner, FailurePolicy, FileCollector};
use crate::error::Result;

use std::path::PathBuf;

/// 默认匹配模式
pub const DEFAULT_PATTERN: &str = "*.cpp";

/// 重编码配置
#[derive(Debug, Clone)]
pub struct ReencodeOptions {
    /// 根目录（或单个文件）
    pub root: PathBuf,
    /// 文件名 glob 模式，逗号分隔
    pub pattern: String,
    /// 旧式代码页
    pub codepage: LegacyCodePage,
    /// 失败策略
    pub policy: FailurePolicy,
    /// 只检查不写入
    pub dry_run: bool,
    /// 最大递归深度
    pub max_depth: Option<usize>,
    /// 是否包含隐藏文件/目录
    pub include_hidden: bool,
}

impl Default for ReencodeOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            pattern: DEFAULT_PATTERN.to_string(),
            codepage: LegacyCodePage::default(),
            policy: FailurePolicy::Abort,
            dry_run: false,
            max_depth: None,
            include_hidden: false,
        }
    }
}

impl ReencodeOptions {
    /// 按配置构造文件收集器
    pub fn collector(&self) -> Result<FileCollector> {
        Ok(FileCollector::new(&self.root)
            .with_pattern(&self.pattern)?
            .max_depth(self.max_depth)
            .include_hidden(self.include_hidden))
    }
}

/// 收集文件
pub fn collect_files(options: &ReencodeOptions) -> Result<Vec<PathBuf>> {
    options.collector()?.collect()
}

/// 重编码已收集的文件列表
pub fn reencode_files(files: &[PathBuf], options: &ReencodeOptions) -> Result<BatchResult> {
    BatchRunner::new(options.policy).run(files, |path| {
        reencode::reencode_file(path, options.codepage, options.dry_run)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Utf8BomError;
    use std::fs;
    use std::path::Path;

    fn reencode_tree(options: &ReencodeOptions) -> Result<BatchResult> {
        let files = collect_files(options)?;
        reencode_files(&files, options)
    }

    fn options(root: &Path) -> ReencodeOptions {
        ReencodeOptions {
            root: root.to_path_buf(),
            ..Default::default()
        }
    }

    fn sjis_options(root: &Path) -> ReencodeOptions {
        ReencodeOptions {
            codepage: LegacyCodePage::from_label("shift_jis").unwrap(),
            ..options(root)
        }
    }

    #[test]
    fn test_scenarios_a_b_c() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.cpp");
        let b = dir.path().join("b.cpp");
        let c = dir.path().join("c.txt");
        fs::write(&a, b"\x63\x61\x66\xE9").unwrap();
        fs::write(&b, b"\xEF\xBB\xBF\x68\x69").unwrap();
        fs::write(&c, b"\x63\x61\x66\xE9").unwrap();

        let result = reencode_tree(&options(dir.path())).unwrap();

        assert_eq!(result.rewritten, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.total(), 2);
        assert_eq!(
            fs::read(&a).unwrap(),
            b"\xEF\xBB\xBF\x63\x61\x66\xC3\xA9"
        );
        assert_eq!(fs::read(&b).unwrap(), b"\xEF\xBB\xBF\x68\x69");
        assert_eq!(fs::read(&c).unwrap(), b"\x63\x61\x66\xE9");
    }

    #[test]
    fn test_idempotent_and_marked() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/util")).unwrap();
        fs::write(dir.path().join("main.cpp"), b"// na\xEFve\n").unwrap();
        fs::write(dir.path().join("src/util/str.cpp"), b"\xA9 2024\n").unwrap();

        let opts = options(dir.path());
        reencode_tree(&opts).unwrap();
        let files = collect_files(&opts).unwrap();
        let first: Vec<Vec<u8>> = files.iter().map(|f| fs::read(f).unwrap()).collect();
        assert!(first.iter().all(|bytes| bom::has_utf8_bom(bytes)));

        let second_run = reencode_tree(&opts).unwrap();
        assert_eq!(second_run.rewritten, 0);
        assert_eq!(second_run.skipped, 2);
        let second: Vec<Vec<u8>> = files.iter().map(|f| fs::read(f).unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scenario_d_aborts_without_rollback() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.cpp");
        let d = dir.path().join("d.cpp");
        let e = dir.path().join("e.cpp");
        fs::write(&a, b"\x82\xA0").unwrap();
        fs::write(&d, b"\xA0").unwrap();
        fs::write(&e, b"\x82\xA2").unwrap();

        let err = reencode_tree(&sjis_options(dir.path())).unwrap_err();
        assert!(matches!(err, Utf8BomError::DecodeError { .. }));

        assert_eq!(fs::read(&a).unwrap(), "\u{FEFF}あ".as_bytes());
        assert_eq!(fs::read(&d).unwrap(), b"\xA0");
        assert_eq!(fs::read(&e).unwrap(), b"\x82\xA2");
    }

    #[test]
    fn test_keep_going_processes_remaining() {
        let dir = tempfile::tempdir().unwrap();
        let d = dir.path().join("d.cpp");
        let e = dir.path().join("e.cpp");
        fs::write(&d, b"\xA0").unwrap();
        fs::write(&e, b"\x82\xA2").unwrap();

        let opts = ReencodeOptions {
            policy: FailurePolicy::Continue,
            ..sjis_options(dir.path())
        };
        let result = reencode_tree(&opts).unwrap();

        assert_eq!(result.failed, 1);
        assert_eq!(result.rewritten, 1);
        assert_eq!(result.failures[0].0, d);
        assert_eq!(fs::read(&e).unwrap(), "\u{FEFF}い".as_bytes());
    }

    #[test]
    fn test_dry_run_leaves_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.cpp");
        fs::write(&a, b"caf\xE9").unwrap();

        let opts = ReencodeOptions {
            dry_run: true,
            ..options(dir.path())
        };
        let result = reencode_tree(&opts).unwrap();

        assert_eq!(result.rewritten, 1);
        assert_eq!(fs::read(&a).unwrap(), b"caf\xE9");
    }

    #[test]
    fn test_no_matches_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.txt"), b"hi").unwrap();

        let result = reencode_tree(&options(dir.path())).unwrap();
        assert_eq!(result.total(), 0);
    }
}
