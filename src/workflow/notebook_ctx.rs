//! 笔记本处理上下文
//!
//! 封装"我正在处理哪个笔记本、结果写到哪里"这一信息

use std::fmt::Display;
use std::path::{Path, PathBuf};

/// 笔记本处理上下文
#[derive(Debug, Clone)]
pub struct NotebookCtx {
    /// 源笔记本路径
    pub source: PathBuf,

    /// 输出路径，为 `None` 时覆盖源文件
    pub output: Option<PathBuf>,
}

impl NotebookCtx {
    pub fn new(source: impl Into<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output,
        }
    }

    /// 实际写入的位置
    pub fn target(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.source)
    }
}

impl Display for NotebookCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| self.source.to_string_lossy());
        write!(f, "[笔记本 {}]", name)
    }
}
