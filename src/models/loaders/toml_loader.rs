use crate::error::{AppError, AppResult, CatalogError};
use crate::models::exercise::ExerciseCatalog;
use std::fs;
use std::path::Path;
use tracing::info;

/// 编译进程序的列表章节练习目录
const BUILTIN_CATALOG: &str = include_str!("../../../assets/list_exercises.toml");

/// 从 TOML 文件加载练习目录
pub fn load_catalog(toml_file_path: &Path) -> AppResult<ExerciseCatalog> {
    let path_str = toml_file_path.display().to_string();
    let content = fs::read_to_string(toml_file_path)
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;

    let catalog = parse_catalog(&content, &path_str)?;
    info!("✓ 从 {} 加载了 {} 道练习", path_str, catalog.len());

    Ok(catalog)
}

/// 解析 TOML 文本，`origin` 仅用于错误信息
pub fn parse_catalog(content: &str, origin: &str) -> AppResult<ExerciseCatalog> {
    let catalog: ExerciseCatalog =
        toml::from_str(content).map_err(|source| CatalogError::TomlParseFailed {
            path: origin.to_string(),
            source,
        })?;
    catalog.validate()?;
    Ok(catalog)
}

/// 内置练习目录
pub fn builtin_catalog() -> AppResult<ExerciseCatalog> {
    parse_catalog(BUILTIN_CATALOG, "<内置练习目录>")
}
