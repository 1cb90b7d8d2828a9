//! 笔记本数据模型
//!
//! 单元格保留原始 JSON 对象（包括键的顺序），只对 `cell_type`、
//! `source` 和 `metadata.tags` 提供类型化访问，其余字段原样透传

use crate::error::{AppError, AppResult, NotebookError};
use serde::Deserialize;
use serde_json::{json, Map, Value};

/// 交互练习单元格的标签
pub const QUESTION_TAG: &str = "thebe-interactive";
/// 默认隐藏的答案单元格标签
pub const SOLUTION_TAG: &str = "hide-input";

/// 单元格类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Markdown,
    Code,
    Raw,
}

/// 笔记本中的一个单元格
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    kind: CellKind,
    fields: Map<String, Value>,
}

impl Cell {
    /// 从 JSON 值解析单元格，`index` 仅用于错误信息
    pub fn from_value(index: usize, value: Value) -> AppResult<Self> {
        let Value::Object(fields) = value else {
            return Err(AppError::malformed_cell(index, "单元格不是 JSON 对象"));
        };

        let kind_value = fields
            .get("cell_type")
            .ok_or_else(|| AppError::malformed_cell(index, "缺少 cell_type"))?;
        let kind = CellKind::deserialize(kind_value).map_err(|e| {
            AppError::malformed_cell(index, format!("无法识别的 cell_type {}: {}", kind_value, e))
        })?;

        match fields.get("source") {
            Some(Value::String(_)) => {}
            Some(Value::Array(items)) if items.iter().all(Value::is_string) => {}
            Some(_) => {
                return Err(AppError::malformed_cell(
                    index,
                    "source 必须是字符串或字符串数组",
                ))
            }
            None => return Err(AppError::malformed_cell(index, "缺少 source")),
        }

        Ok(Self { kind, fields })
    }

    /// 创建一个新的代码单元格（无输出、未执行）
    pub fn new_code(source: &str, tags: &[&str]) -> Self {
        let mut fields = Map::new();
        fields.insert("cell_type".to_string(), json!("code"));
        fields.insert("execution_count".to_string(), Value::Null);
        fields.insert("metadata".to_string(), json!({ "tags": tags }));
        fields.insert("outputs".to_string(), json!([]));
        fields.insert("source".to_string(), lines_to_value(split_source_lines(source)));
        Self {
            kind: CellKind::Code,
            fields,
        }
    }

    /// 创建一个新的 Markdown 单元格
    pub fn new_markdown(source: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("cell_type".to_string(), json!("markdown"));
        fields.insert("metadata".to_string(), json!({}));
        fields.insert("source".to_string(), lines_to_value(split_source_lines(source)));
        Self {
            kind: CellKind::Markdown,
            fields,
        }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn is_markdown(&self) -> bool {
        self.kind == CellKind::Markdown
    }

    pub fn is_code(&self) -> bool {
        self.kind == CellKind::Code
    }

    /// 单元格的完整文本（行数组会被拼接）
    pub fn source_text(&self) -> String {
        match self.fields.get("source") {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => String::new(),
        }
    }

    /// 按行拆分的文本，每行保留自己的换行符
    pub fn source_lines(&self) -> Vec<String> {
        match self.fields.get("source") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => split_source_lines(&self.source_text()),
        }
    }

    /// 写回按行的文本，保持原来的表示形式（字符串或行数组）
    pub fn set_source_lines(&mut self, lines: Vec<String>) {
        let value = match self.fields.get("source") {
            Some(Value::String(_)) => Value::String(lines.concat()),
            _ => lines_to_value(lines),
        };
        self.fields.insert("source".to_string(), value);
    }

    /// `metadata.tags` 中的标签
    pub fn tags(&self) -> Vec<&str> {
        self.fields
            .get("metadata")
            .and_then(|m| m.get("tags"))
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().contains(&tag)
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// 按换行符拆分文本，每行保留末尾的 `\n`（最后一行除外）
pub fn split_source_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

fn lines_to_value(lines: Vec<String>) -> Value {
    Value::Array(lines.into_iter().map(Value::String).collect())
}

/// 一个笔记本文档：有序的单元格序列加上原样保留的其余顶层字段
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    root: Map<String, Value>,
    cells: Vec<Cell>,
}

impl Notebook {
    /// 从 JSON 文本解析笔记本，`origin` 仅用于错误信息
    pub fn from_json_str(text: &str, origin: &str) -> AppResult<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|source| NotebookError::InvalidJson {
                path: origin.to_string(),
                source,
            })?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> AppResult<Self> {
        let Value::Object(mut root) = value else {
            return Err(NotebookError::NotAnObject.into());
        };

        // cells 的值先取出，键留在原位，序列化时再填回
        let raw_cells = match root.get_mut("cells") {
            Some(Value::Array(items)) => std::mem::take(items),
            _ => return Err(NotebookError::MissingCells.into()),
        };

        let cells = raw_cells
            .into_iter()
            .enumerate()
            .map(|(index, value)| Cell::from_value(index, value))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { root, cells })
    }

    /// 由单元格列表构造一个最小笔记本
    pub fn with_cells(cells: Vec<Cell>) -> Self {
        let mut root = Map::new();
        root.insert("cells".to_string(), Value::Array(Vec::new()));
        root.insert("metadata".to_string(), json!({}));
        root.insert("nbformat".to_string(), json!(4));
        root.insert("nbformat_minor".to_string(), json!(5));
        Self { root, cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn replace_cells(&mut self, cells: Vec<Cell>) {
        self.cells = cells;
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn to_value(&self) -> Value {
        let mut root = self.root.clone();
        let cells = Value::Array(self.cells.iter().map(Cell::to_value).collect());
        match root.get_mut("cells") {
            Some(slot) => *slot = cells,
            None => {
                root.insert("cells".to_string(), cells);
            }
        }
        Value::Object(root)
    }
}
