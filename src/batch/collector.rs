//! # 文件收集器
//!
//! 根据根目录和文件名模式收集待处理文件列表。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - glob 模式匹配（逗号分隔多模式）
//! - 递归目录搜索，同一目录内按文件名排序
//! - 默认跳过隐藏文件和隐藏目录
//! - 跟随符号链接（文件与目录），链接环作为遍历错误返回
//!
//! ## 依赖关系
//! - 被 `transcode/mod.rs`, `commands/check.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 匹配文件名

use crate::error::{Result, Utf8BomError};

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// 文件收集器
pub struct FileCollector {
    /// 输入路径
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<Pattern>,
    /// 最大递归深度，`None` 表示不限
    max_depth: Option<usize>,
    /// 是否包含隐藏文件/目录
    include_hidden: bool,
}

impl FileCollector {
    /// 创建新的文件收集器（默认匹配所有文件）
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            patterns: Vec::new(),
            max_depth: None,
            include_hidden: false,
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.patterns = pattern
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                Pattern::new(s).map_err(|e| {
                    Utf8BomError::InvalidArgument(format!("Invalid pattern '{}': {}", s, e))
                })
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// 设置最大递归深度
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// 设置是否包含隐藏文件/目录
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// 收集所有匹配的文件
    ///
    /// 根目录不存在或遍历出错都会返回错误；没有匹配文件不是错误。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if self.input.is_file() {
            return Ok(if self.matches_patterns(&self.input) {
                vec![self.input.clone()]
            } else {
                vec![]
            });
        }

        if !self.input.is_dir() {
            return Err(Utf8BomError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let mut walker = WalkDir::new(&self.input)
            .follow_links(true)
            .sort_by_file_name();
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let include_hidden = self.include_hidden;
        let mut files = Vec::new();

        for entry in walker
            .into_iter()
            .filter_entry(|e| include_hidden || e.depth() == 0 || !is_hidden(e))
        {
            let entry = entry.map_err(|e| Utf8BomError::WalkError {
                path: e
                    .path()
                    .unwrap_or(&self.input)
                    .display()
                    .to_string(),
                source: e,
            })?;

            if entry.file_type().is_file() && self.matches_patterns(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    /// 检查文件是否匹配任一模式
    fn matches_patterns(&self, path: &Path) -> bool {
        // 非 UTF-8 文件名按有损转换后匹配
        let filename = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return false,
        };

        if self.patterns.is_empty() {
            return self.include_hidden || !filename.starts_with('.');
        }

        let options = MatchOptions {
            require_literal_leading_dot: !self.include_hidden,
            ..MATCH_OPTIONS
        };
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_with(&filename, options))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_string_lossy()
        .starts_with('.')
}
