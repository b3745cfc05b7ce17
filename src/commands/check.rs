//! # check 命令实现
//!
//! 列出缺少 UTF-8 BOM 的文件，不修改任何文件。存在缺失时以非零状态退出。
//!
//! ## 依赖关系
//! - 使用 `cli/check.rs` 定义的参数
//! - 使用 `transcode/`, `utils/output.rs`

use crate::cli::check::CheckArgs;
use crate::error::{Result, Utf8BomError};
use crate::transcode::{self, bom, ReencodeOptions};
use crate::utils::output;

/// 执行 check 命令
pub fn execute(args: CheckArgs) -> Result<()> {
    let options = ReencodeOptions::from(args.scan);
    let files = transcode::collect_files(&options)?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            options.pattern,
            options.root.display()
        ));
        return Ok(());
    }

    let mut unmarked = 0;
    for file in &files {
        if !bom::file_has_utf8_bom(file)? {
            output::print_path(file);
            unmarked += 1;
        }
    }

    if unmarked > 0 {
        return Err(Utf8BomError::UnmarkedFiles { count: unmarked });
    }

    output::print_success(&format!("All {} file(s) start with a UTF-8 BOM", files.len()));
    Ok(())
}
