//! # convert 命令实现
//!
//! 批量将旧式代码页文件重写为 UTF-8 + BOM。
//!
//! ## 功能
//! - 递归收集匹配文件
//! - 已带 BOM 的文件跳过
//! - 其余文件按指定代码页解码后覆盖写回
//! - 默认遇错即停；`--keep-going` 时继续并在结束时汇总
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `transcode/`
//! - 使用 `utils/output.rs`

use crate::batch::FailurePolicy;
use crate::cli::convert::ConvertArgs;
use crate::error::{Result, Utf8BomError};
use crate::transcode::{self, ReencodeOptions};
use crate::utils::output;

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    output::print_header(&format!("Converting {} -> UTF-8 (BOM)", args.encoding));

    let options = ReencodeOptions {
        codepage: args.encoding,
        policy: if args.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Abort
        },
        dry_run: args.dry_run,
        ..ReencodeOptions::from(args.scan)
    };

    let files = transcode::collect_files(&options)?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matched '{}' under {}",
            options.pattern,
            options.root.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} files to check", files.len()));
    if options.dry_run {
        output::print_info("Dry run: no files will be written");
    }

    let result = transcode::reencode_files(&files, &options)?;

    let verb = if options.dry_run { "Would convert" } else { "Converted" };
    output::print_done(&format!(
        "{} {} of {} file(s), {} already UTF-8 with BOM",
        verb,
        result.rewritten,
        result.total(),
        result.skipped
    ));

    if result.failed > 0 {
        output::print_separator();
        for (path, message) in &result.failures {
            output::print_error(&format!("{}: {}", path.display(), message));
        }
        return Err(Utf8BomError::BatchFailed {
            failed: result.failed,
        });
    }

    Ok(())
}
