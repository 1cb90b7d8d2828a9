//! 笔记本写入服务 - 业务能力层
//!
//! 只负责"把笔记本写回磁盘"能力：
//! - 缩进宽度可配置（默认 1 个空格）
//! - 非 ASCII 字符原样输出
//! - 先写临时文件再改名，写入中途失败不会损坏目标文件

use crate::error::{AppError, AppResult, FileError, NotebookError};
use crate::models::Notebook;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 默认缩进宽度
pub const DEFAULT_INDENT: usize = 1;

/// 笔记本写入服务
pub struct NotebookWriter {
    indent_width: usize,
}

impl NotebookWriter {
    /// 创建新的写入服务
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    /// 序列化为磁盘格式，末尾带一个换行
    pub fn to_bytes(&self, notebook: &Notebook) -> AppResult<Vec<u8>> {
        let indent = vec![b' '; self.indent_width];
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        notebook
            .to_value()
            .serialize(&mut serializer)
            .map_err(NotebookError::SerializeFailed)?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// 原子地写入目标文件
    ///
    /// # 参数
    /// - `notebook`: 要写入的笔记本
    /// - `target`: 目标路径（已存在时被替换）
    pub fn write(&self, notebook: &Notebook, target: &Path) -> AppResult<()> {
        let bytes = self.to_bytes(notebook)?;
        let temp = temp_path_for(target);

        debug!("写入临时文件 {} ({} 字节)", temp.display(), bytes.len());
        if let Err(e) = fs::write(&temp, &bytes) {
            let _ = fs::remove_file(&temp);
            return Err(AppError::file_write_failed(temp.display().to_string(), e));
        }

        // 替换后保留目标文件原有的权限
        if let Ok(metadata) = fs::metadata(target) {
            if let Err(e) = fs::set_permissions(&temp, metadata.permissions()) {
                let _ = fs::remove_file(&temp);
                return Err(AppError::file_write_failed(temp.display().to_string(), e));
            }
        }

        if let Err(source) = fs::rename(&temp, target) {
            let _ = fs::remove_file(&temp);
            return Err(FileError::RenameFailed {
                from: temp.display().to_string(),
                to: target.display().to_string(),
                source,
            }
            .into());
        }

        info!("💾 已保存 {} ({} 个单元格)", target.display(), notebook.len());
        Ok(())
    }
}

impl Default for NotebookWriter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

/// 与目标同目录的临时文件路径，如 `0501-list.ipynb.tmp`
fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("notebook"));
    name.push(".tmp");
    target.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;

    // 与 Jupyter 落盘格式一致：缩进 1 个空格，行尾换行
    const ON_DISK: &str = r####"{
 "cells": [
  {
   "cell_type": "markdown",
   "metadata": {},
   "source": [
    "### Liste\n",
    "Élément · 列表"
   ]
  },
  {
   "cell_type": "code",
   "execution_count": null,
   "metadata": {
    "tags": [
     "hide-input"
    ]
   },
   "outputs": [],
   "source": []
  }
 ],
 "metadata": {
  "kernelspec": {
   "display_name": "Python 3",
   "language": "python",
   "name": "python3"
  }
 },
 "nbformat": 4,
 "nbformat_minor": 5
}
"####;

    #[test]
    fn test_round_trip_is_byte_identical() {
        let notebook = Notebook::from_json_str(ON_DISK, "inline").unwrap();
        let bytes = NotebookWriter::default().to_bytes(&notebook).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), ON_DISK);
    }

    // 数字按原始文本写回，不做浮点规范化
    const NUMERIC_METADATA: &str = r####"{
 "cells": [
  {
   "cell_type": "code",
   "execution_count": 7,
   "metadata": {
    "scrolled": 1e-05,
    "trace_id": 123456789012345678901234
   },
   "outputs": [],
   "source": [
    "x = 0.1"
   ]
  }
 ],
 "metadata": {},
 "nbformat": 4,
 "nbformat_minor": 5
}
"####;

    #[test]
    fn test_number_text_is_preserved() {
        let notebook = Notebook::from_json_str(NUMERIC_METADATA, "inline").unwrap();
        let bytes = NotebookWriter::default().to_bytes(&notebook).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), NUMERIC_METADATA);
    }

    #[test]
    fn test_non_ascii_is_not_escaped() {
        let notebook = Notebook::with_cells(vec![Cell::new_markdown("中文标题 ✏️")]);
        let text = String::from_utf8(NotebookWriter::new(2).to_bytes(&notebook).unwrap()).unwrap();
        assert!(text.contains("中文标题 ✏️"));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\n  \"cells\""));
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let temp = temp_path_for(Path::new("/tmp/book/0501-list.ipynb"));
        assert_eq!(temp, PathBuf::from("/tmp/book/0501-list.ipynb.tmp"));
    }

    #[test]
    fn test_write_replaces_target_and_removes_temp() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nb.ipynb");
        fs::write(&target, "old").unwrap();

        let notebook = Notebook::from_json_str(ON_DISK, "inline").unwrap();
        NotebookWriter::default().write(&notebook, &target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), ON_DISK);
        assert!(!temp_path_for(&target).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_target_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nb.ipynb");
        fs::write(&target, "old").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o600)).unwrap();

        let notebook = Notebook::from_json_str(ON_DISK, "inline").unwrap();
        NotebookWriter::default().write(&notebook, &target).unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(fs::read_to_string(&target).unwrap(), ON_DISK);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("nb.ipynb");
        let notebook = Notebook::with_cells(Vec::new());
        let err = NotebookWriter::default().write(&notebook, &target).unwrap_err();
        assert!(matches!(err, AppError::File(FileError::WriteFailed { .. })));
    }
}
