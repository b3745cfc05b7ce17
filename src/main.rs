//! # utf8bom - 旧式代码页源文件批量转 UTF-8
//!
//! 递归扫描目录下匹配的文件；未以 UTF-8 BOM 开头的文件按指定的旧式
//! 代码页 (ANSI code page) 解码，并以 UTF-8 + BOM 覆盖写回。
//!
//! ## 子命令
//! - `convert` - 批量重编码
//! - `check`   - 只列出缺少 BOM 的文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── transcode/ (BOM 检测、代码页解码、单文件重写)
//!   │     └── batch/     (文件收集、顺序执行)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod transcode;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
