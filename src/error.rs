use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 笔记本结构错误
    #[error("笔记本错误: {0}")]
    Notebook(#[from] NotebookError),
    /// 练习目录错误
    #[error("练习目录错误: {0}")]
    Catalog(#[from] CatalogError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 临时文件替换目标文件失败
    #[error("替换文件失败 ({from} -> {to}): {source}")]
    RenameFailed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}

/// 笔记本结构错误
#[derive(Debug, Error)]
pub enum NotebookError {
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// 顶层不是对象
    #[error("笔记本顶层必须是 JSON 对象")]
    NotAnObject,
    /// 缺少 cells 数组
    #[error("笔记本缺少 cells 数组")]
    MissingCells,
    /// 单元格结构不合法
    #[error("单元格 {index} 结构不合法: {reason}")]
    MalformedCell { index: usize, reason: String },
    /// 序列化失败
    #[error("笔记本序列化失败: {0}")]
    SerializeFailed(#[source] serde_json::Error),
}

/// 练习目录错误
#[derive(Debug, Error)]
pub enum CatalogError {
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 标题不是 Markdown 标题
    #[error("练习标题必须是 Markdown 标题 (如 \"### Title\"): {title:?}")]
    InvalidTitle { title: String },
    /// 标题重复
    #[error("练习标题重复: {title}")]
    DuplicateTitle { title: String },
    /// 目录为空
    #[error("练习目录为空")]
    Empty,
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建单元格结构错误
    pub fn malformed_cell(index: usize, reason: impl Into<String>) -> Self {
        AppError::Notebook(NotebookError::MalformedCell {
            index,
            reason: reason.into(),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            AppError::File(FileError::NotFound { path })
        } else {
            AppError::File(FileError::ReadFailed { path, source })
        }
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
