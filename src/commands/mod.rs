//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `transcode/`, `batch/`, `utils/`
//! - 子模块: convert, check

pub mod check;
pub mod convert;

use crate::cli::{Commands, ScanArgs};
use crate::error::Result;
use crate::transcode::ReencodeOptions;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Convert(args) => convert::execute(args),
        Commands::Check(args) => check::execute(args),
    }
}

impl From<ScanArgs> for ReencodeOptions {
    fn from(scan: ScanArgs) -> Self {
        Self {
            root: scan.root,
            pattern: scan.pattern,
            max_depth: scan.max_depth,
            include_hidden: scan.hidden,
            ..Default::default()
        }
    }
}
