//! 章节定位 - 业务能力层
//!
//! 扫描单元格，找到与练习目录中标题完全一致的 Markdown 标题

use crate::models::heading::starts_with_heading_line;
use crate::models::{Cell, Exercise, ExerciseCatalog};
use crate::services::span_finder::{find_span, Span};
use std::collections::HashSet;
use tracing::debug;

/// 匹配到的章节
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// 匹配到的目录标题
    pub title: String,
    /// 标题层级
    pub depth: usize,
    pub span: Span,
}

/// 单元格是否以某个目录标题开头，返回对应的练习
pub fn match_title<'a>(cell: &Cell, catalog: &'a ExerciseCatalog) -> Option<&'a Exercise> {
    if !cell.is_markdown() {
        return None;
    }
    let source = cell.source_text();
    catalog
        .exercises()
        .iter()
        .find(|exercise| starts_with_heading_line(&source, &exercise.title))
}

/// 按文档顺序定位所有章节
///
/// - 每个标题只匹配第一次出现
/// - 匹配后从该章节结束处继续扫描，因此章节互不重叠
pub fn locate_sections(cells: &[Cell], catalog: &ExerciseCatalog) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut matched: HashSet<&str> = HashSet::new();
    let mut cursor = 0;

    while cursor < cells.len() {
        let hit = match_title(&cells[cursor], catalog)
            .filter(|exercise| !matched.contains(exercise.title.as_str()));

        let Some(exercise) = hit else {
            cursor += 1;
            continue;
        };

        let depth = exercise.depth();
        let span = find_span(cells, cursor, depth);
        debug!(
            "定位到章节 {:?}: 单元格 [{}, {})",
            exercise.title, span.start, span.end
        );

        matched.insert(exercise.title.as_str());
        sections.push(Section {
            title: exercise.title.clone(),
            depth,
            span,
        });
        cursor = span.end;
    }

    sections
}
