//! 笔记本维护流程 - 流程层
//!
//! 结构分析和标题改写，都是对单个笔记本的一次遍历

use std::collections::HashSet;
use tracing::info;

use crate::models::Notebook;
use crate::services::heading_rewriter::{demote_h2, to_html_headings, LineChange};
use crate::services::structure_analyzer::{analyze, FindingStatus};
use crate::workflow::flow_report::FlowReport;

/// 分析练习位置（只读）
pub fn run_analyze(notebook: &Notebook) -> FlowReport {
    let mut report = FlowReport::new("analyze");
    let findings = analyze(notebook.cells());

    for finding in &findings {
        match &finding.status {
            FindingStatus::Ok => {
                report.push(format!("✓ OK: {}", finding.exercise_title));
            }
            FindingStatus::NeedsMoving { content_cells } => {
                let shown: Vec<String> = content_cells
                    .iter()
                    .take(5)
                    .map(|i| i.to_string())
                    .collect();
                report.push("❌ NEEDS MOVING:");
                report.push(format!(
                    "   Section: {}",
                    finding.section_title.as_deref().unwrap_or("No section")
                ));
                report.push(format!(
                    "   Exercise (cell {}): {}",
                    finding.exercise_index, finding.exercise_title
                ));
                report.push(format!(
                    "   Content after exercise at cells: {}",
                    shown.join(", ")
                ));
            }
        }
    }

    let misplaced = findings.iter().filter(|f| f.needs_moving()).count();
    info!("🔎 共 {} 道练习，{} 道需要挪动", findings.len(), misplaced);
    report
}

fn push_line_changes(report: &mut FlowReport, changes: &[LineChange]) {
    for change in changes {
        report.push(format!("  Cell {}:", change.cell_number));
        report.push(format!("    - {:?}", change.old));
        report.push(format!("    + {:?}", change.new));
    }
    report.changes = changes.len();
}

/// 三、四级标题改为 HTML 标题
pub fn run_html_headings(notebook: &mut Notebook) -> FlowReport {
    let mut report = FlowReport::new("html-headings");
    let changes = to_html_headings(notebook);
    push_line_changes(&mut report, &changes);
    info!("🔧 改写了 {} 行标题", changes.len());
    report
}

/// "Exercises" 之前的二级标题降级
pub fn run_demote_h2(notebook: &mut Notebook, keep: &[String]) -> FlowReport {
    let keep: HashSet<String> = keep.iter().map(|k| k.trim().to_lowercase()).collect();
    let mut report = FlowReport::new("demote-h2");
    let changes = demote_h2(notebook, &keep);
    push_line_changes(&mut report, &changes);
    info!("🔧 降级了 {} 个二级标题", changes.len());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, QUESTION_TAG, SOLUTION_TAG};

    #[test]
    fn test_analyze_report_lines() {
        let nb = Notebook::with_cells(vec![
            Cell::new_markdown("### Lists"),
            Cell::new_code("# Exercise: lists", &[QUESTION_TAG]),
            Cell::new_code("# Solution", &[SOLUTION_TAG]),
            Cell::new_code("extra = 1", &[]),
        ]);
        let report = run_analyze(&nb);
        assert!(!report.is_changed());
        assert_eq!(report.lines[0], "❌ NEEDS MOVING:");
        assert_eq!(report.lines[1], "   Section: ### Lists");
        assert_eq!(report.lines[3], "   Content after exercise at cells: 3");
    }

    #[test]
    fn test_demote_keep_is_case_insensitive() {
        let mut nb = Notebook::with_cells(vec![
            Cell::new_markdown("## Lists"),
            Cell::new_markdown("## Tuples"),
        ]);
        let report = run_demote_h2(&mut nb, &["LISTS".to_string()]);
        assert_eq!(report.changes, 1);
        assert_eq!(nb.cells()[1].source_text(), "### Tuples");
    }

    #[test]
    fn test_html_headings_counts_changes() {
        let mut nb = Notebook::with_cells(vec![Cell::new_markdown("### A\n#### B")]);
        let report = run_html_headings(&mut nb);
        assert_eq!(report.changes, 2);
        assert_eq!(report.lines[0], "  Cell 1:");
    }
}
