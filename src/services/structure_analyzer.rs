//! 结构分析服务 - 业务能力层
//!
//! 检查每道练习之后、下一个章节之前是否还有正文内容。
//! 练习应该位于章节末尾，后面还有内容说明需要挪动

use crate::models::heading::heading_depth;
use crate::models::{Cell, QUESTION_TAG, SOLUTION_TAG};
use crate::utils::logging::truncate_text;

/// 旧版笔记本中练习单元格使用的文字标记
const EXERCISE_MARKER: &str = "### EXERCISE";
/// 答案单元格的文字标记
const SOLUTION_MARKER: &str = "# Solution";

/// 结构条目类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Section { title: String },
    Exercise { title: String },
    Solution,
    Code,
    Markdown,
}

/// 一个非空单元格的结构条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureItem {
    /// 单元格索引
    pub index: usize,
    pub kind: ItemKind,
}

/// 单道练习的检查结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingStatus {
    Ok,
    /// 练习之后仍有内容的单元格索引
    NeedsMoving { content_cells: Vec<usize> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFinding {
    pub exercise_index: usize,
    pub exercise_title: String,
    /// 所在章节标题，练习出现在第一个章节之前时为 `None`
    pub section_title: Option<String>,
    pub status: FindingStatus,
}

impl ExerciseFinding {
    pub fn needs_moving(&self) -> bool {
        matches!(self.status, FindingStatus::NeedsMoving { .. })
    }
}

fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or("")
}

/// 对单元格分类，空单元格返回 `None`
pub fn classify(index: usize, cell: &Cell) -> Option<StructureItem> {
    let source = cell.source_text();
    if source.trim().is_empty() {
        return None;
    }
    let line = first_line(&source).trim();

    let kind = if cell.is_markdown() && heading_depth(line).is_some() {
        ItemKind::Section {
            title: line.to_string(),
        }
    } else if cell.has_tag(QUESTION_TAG) || source.contains(EXERCISE_MARKER) {
        ItemKind::Exercise {
            title: truncate_text(line, 60),
        }
    } else if cell.is_code() && (cell.has_tag(SOLUTION_TAG) || source.contains(SOLUTION_MARKER)) {
        ItemKind::Solution
    } else if cell.is_code() {
        ItemKind::Code
    } else if cell.is_markdown() {
        ItemKind::Markdown
    } else {
        return None;
    };

    Some(StructureItem { index, kind })
}

/// 构建结构条目列表
pub fn build_structure(cells: &[Cell]) -> Vec<StructureItem> {
    cells
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| classify(index, cell))
        .collect()
}

/// 分析每道练习的位置
pub fn analyze(cells: &[Cell]) -> Vec<ExerciseFinding> {
    let structure = build_structure(cells);
    let mut findings = Vec::new();

    for (pos, item) in structure.iter().enumerate() {
        let ItemKind::Exercise { title } = &item.kind else {
            continue;
        };

        let section_title = structure[..pos].iter().rev().find_map(|s| match &s.kind {
            ItemKind::Section { title } => Some(title.clone()),
            _ => None,
        });

        let content_cells: Vec<usize> = structure[pos + 1..]
            .iter()
            .take_while(|s| !matches!(s.kind, ItemKind::Section { .. }))
            .filter(|s| matches!(s.kind, ItemKind::Code | ItemKind::Markdown))
            .map(|s| s.index)
            .collect();

        let status = if content_cells.is_empty() {
            FindingStatus::Ok
        } else {
            FindingStatus::NeedsMoving { content_cells }
        };

        findings.push(ExerciseFinding {
            exercise_index: item.index,
            exercise_title: title.clone(),
            section_title,
            status,
        });
    }

    findings
}
