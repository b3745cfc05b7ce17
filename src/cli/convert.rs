//! # convert 子命令 CLI 定义
//!
//! 批量将旧式代码页文件重写为 UTF-8 + BOM
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Args;

use super::ScanArgs;
use crate::transcode::LegacyCodePage;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Legacy code page of unmarked files (label like 'windows-1252' or number like '932')
    #[arg(short, long, env = "UTF8BOM_ENCODING", default_value = "windows-1252")]
    pub encoding: LegacyCodePage,

    /// Keep processing remaining files after an error
    #[arg(short, long, default_value_t = false)]
    pub keep_going: bool,

    /// Report what would be converted without writing any file
    #[arg(short = 'n', long, default_value_t = false)]
    pub dry_run: bool,
}
