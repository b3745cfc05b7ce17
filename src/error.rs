//! # 统一错误处理模块
//!
//! 定义 utf8bom 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// utf8bom 统一错误类型
#[derive(Error, Debug)]
pub enum Utf8BomError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to traverse directory: {path}")]
    WalkError {
        path: String,
        #[source]
        source: walkdir::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 编码错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode {path} as {encoding}: malformed byte sequence")]
    DecodeError { path: String, encoding: String },

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 批处理汇总
    // ─────────────────────────────────────────────────────────────
    #[error("{failed} file(s) failed to convert")]
    BatchFailed { failed: usize },

    #[error("{count} file(s) are missing the UTF-8 BOM")]
    UnmarkedFiles { count: usize },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Utf8BomError>;
