//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 将旧式代码页文件重写为 UTF-8 + BOM
//! - `check`: 列出缺少 BOM 的文件，不做修改
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, check

pub mod check;
pub mod convert;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::transcode::DEFAULT_PATTERN;

/// utf8bom - 旧式代码页源文件批量转 UTF-8 (带 BOM)
#[derive(Parser)]
#[command(name = "utf8bom")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Re-encode legacy code page files to UTF-8 with BOM", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite files without a UTF-8 BOM as UTF-8 with BOM
    Convert(convert::ConvertArgs),

    /// List files that are missing the UTF-8 BOM (no changes are made)
    Check(check::CheckArgs),
}

/// 文件扫描相关的公共参数
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Root directory (or single file) to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Glob pattern(s) for file names, comma separated
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Maximum directory depth to descend (unlimited by default)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Include hidden files and directories
    #[arg(long, default_value_t = false)]
    pub hidden: bool,
}
