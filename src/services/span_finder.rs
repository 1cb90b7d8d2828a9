//! 章节范围查找 - 业务能力层
//!
//! 只负责"这个章节到哪里结束"，不关心练习内容

use crate::models::heading::heading_depth;
use crate::models::Cell;

/// 章节占据的单元格范围 `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// 章节标题单元格的索引
    pub start: usize,
    /// 下一个同级或更高级标题的索引，没有则为单元格总数
    pub end: usize,
}

impl Span {
    /// 标题之后、下一个标题之前的内容单元格数
    pub fn content_len(&self) -> usize {
        self.end.saturating_sub(self.start + 1)
    }
}

/// 从 `start + 1` 向后扫描，找到第一个层级不深于 `depth` 的 Markdown 标题
///
/// 返回章节的结束位置（不包含），没有找到时章节延伸到文档末尾
pub fn find_span_end(cells: &[Cell], start: usize, depth: usize) -> usize {
    cells
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, cell)| {
            cell.is_markdown()
                && heading_depth(&cell.source_text()).is_some_and(|d| d <= depth)
        })
        .map(|(index, _)| index)
        .unwrap_or(cells.len())
}

/// 计算章节范围
pub fn find_span(cells: &[Cell], start: usize, depth: usize) -> Span {
    Span {
        start,
        end: find_span_end(cells, start, depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(text: &str) -> Cell {
        Cell::new_markdown(text)
    }

    fn code(text: &str) -> Cell {
        Cell::new_code(text, &[])
    }

    #[test]
    fn test_span_stops_at_sibling_heading() {
        let cells = vec![md("### A"), code("x=1"), md("### B"), code("y=2")];
        let span = find_span(&cells, 0, 3);
        assert_eq!(span, Span { start: 0, end: 2 });
        assert_eq!(span.content_len(), 1);
    }

    #[test]
    fn test_span_stops_at_shallower_heading() {
        let cells = vec![md("### A"), code("x=1"), md("## Chapter"), code("y=2")];
        assert_eq!(find_span_end(&cells, 0, 3), 2);
    }

    #[test]
    fn test_span_includes_deeper_headings() {
        let cells = vec![
            md("### A"),
            md("#### Detail"),
            code("x=1"),
            md("### B"),
        ];
        assert_eq!(find_span_end(&cells, 0, 3), 3);
    }

    #[test]
    fn test_span_runs_to_end_of_document() {
        let cells = vec![md("### A"), code("x=1"), md("plain text")];
        assert_eq!(find_span_end(&cells, 0, 3), 3);
    }

    #[test]
    fn test_empty_span() {
        let cells = vec![md("### A"), md("### B")];
        let span = find_span(&cells, 0, 3);
        assert_eq!(span.end, 1);
        assert_eq!(span.content_len(), 0);
    }

    #[test]
    fn test_code_cell_with_hash_comment_is_not_heading() {
        let cells = vec![md("### A"), code("# comment"), code("## also comment")];
        assert_eq!(find_span_end(&cells, 0, 3), 3);
    }
}
