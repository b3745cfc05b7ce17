//! # 单文件重编码
//!
//! 读取整个文件 → 检查 BOM → 按旧式代码页严格解码 → 以 UTF-8 + BOM 覆盖写回。
//!
//! 未带 BOM 的文件一律视为旧式编码，即使其内容本身是合法 UTF-8。
//!
//! ## 依赖关系
//! - 被 `transcode/mod.rs` 调用
//! - 使用 `transcode/bom.rs`, `transcode/codepage.rs`

use super::bom::{has_utf8_bom, UTF8_BOM};
use super::codepage::LegacyCodePage;
use crate::batch::FileOutcome;
use crate::error::{Result, Utf8BomError};

use std::fs;
use std::path::Path;

/// 将字节序列转换为 UTF-8 + BOM
///
/// 已带 BOM 时返回 `Ok(None)`；`source` 仅用于错误信息。
pub fn reencode_bytes(
    bytes: &[u8],
    codepage: LegacyCodePage,
    source: &Path,
) -> Result<Option<Vec<u8>>> {
    if has_utf8_bom(bytes) {
        return Ok(None);
    }

    let text = codepage
        .decode(bytes)
        .ok_or_else(|| Utf8BomError::DecodeError {
            path: source.display().to_string(),
            encoding: codepage.name().to_string(),
        })?;

    let mut output = Vec::with_capacity(UTF8_BOM.len() + text.len());
    output.extend_from_slice(&UTF8_BOM);
    output.extend_from_slice(text.as_bytes());
    Ok(Some(output))
}

/// 重编码单个文件（截断后整体写入，无临时文件）
pub fn reencode_file(path: &Path, codepage: LegacyCodePage, dry_run: bool) -> Result<FileOutcome> {
    let data = fs::read(path).map_err(|e| Utf8BomError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let Some(converted) = reencode_bytes(&data, codepage, path)? else {
        return Ok(FileOutcome::Skipped);
    };

    if !dry_run {
        fs::write(path, converted).map_err(|e| Utf8BomError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;
    }

    Ok(FileOutcome::Rewritten)
}
