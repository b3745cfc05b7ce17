//! # UTF-8 BOM 检测
//!
//! ## 依赖关系
//! - 被 `transcode/reencode.rs` 和 `commands/check.rs` 使用

use crate::error::{Result, Utf8BomError};

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// UTF-8 字节序标记 `EF BB BF`
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// 字节序列是否以 UTF-8 BOM 开头
pub fn has_utf8_bom(bytes: &[u8]) -> bool {
    bytes.starts_with(&UTF8_BOM)
}

/// 只读取文件开头判断是否带 BOM，不读入整个文件
pub fn file_has_utf8_bom(path: &Path) -> Result<bool> {
    let read_err = |e| Utf8BomError::FileReadError {
        path: path.display().to_string(),
        source: e,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut head = Vec::with_capacity(UTF8_BOM.len());
    file.take(UTF8_BOM.len() as u64)
        .read_to_end(&mut head)
        .map_err(read_err)?;

    Ok(has_utf8_bom(&head))
}
