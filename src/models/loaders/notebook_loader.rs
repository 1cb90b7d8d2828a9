use crate::error::{AppError, AppResult};
use crate::models::notebook::Notebook;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// 从磁盘完整读取笔记本
///
/// 整个文件读入内存并解析完成后才返回，之后的任何修改都不会触及源文件
pub fn load_notebook(notebook_path: &Path) -> AppResult<Notebook> {
    let path_str = notebook_path.display().to_string();
    let content =
        fs::read_to_string(notebook_path).map_err(|e| AppError::file_read_failed(&path_str, e))?;
    debug!("读取 {} 字节: {}", content.len(), path_str);

    let notebook = Notebook::from_json_str(&content, &path_str)?;
    info!("📖 已加载笔记本 {} ({} 个单元格)", path_str, notebook.len());

    Ok(notebook)
}
