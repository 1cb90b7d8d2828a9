//! 练习注入流程 - 流程层
//!
//! 流程顺序：
//! 1. 定位章节（纯函数）
//! 2. 生成插入计划（纯函数，跳过已有练习的章节）
//! 3. 一次遍历重建单元格序列

use tracing::{info, warn};

use crate::models::heading::starts_with_heading_line;
use crate::models::{ExerciseCatalog, Notebook};
use crate::services::{apply_plan, locate_sections, plan_insertions, InsertionPlan};
use crate::workflow::flow_report::FlowReport;

/// 练习注入流程
///
/// - 只在内存中修改笔记本，不做任何 I/O
/// - 目录由调用方注入，同一流程可用于任意笔记本
pub struct InjectFlow {
    catalog: ExerciseCatalog,
}

impl InjectFlow {
    pub fn new(catalog: ExerciseCatalog) -> Self {
        Self { catalog }
    }

    /// 只计算插入计划，不修改笔记本
    pub fn plan(&self, notebook: &Notebook) -> InsertionPlan {
        let sections = locate_sections(notebook.cells(), &self.catalog);
        plan_insertions(notebook.cells(), sections, &self.catalog)
    }

    pub fn run(&self, notebook: &mut Notebook) -> FlowReport {
        let plan = self.plan(notebook);
        let mut report = FlowReport::new("inject");

        for insertion in &plan.insertions {
            let span = insertion.section.span;
            info!(
                "✏️ {} -> 插入到第 {} 个单元格之前 (章节内容 {} 个单元格)",
                insertion.section.title,
                span.end,
                span.content_len()
            );
            report.push(format!(
                "✓ {} (单元格 {}-{})",
                insertion.section.title,
                span.start + 1,
                span.end
            ));
        }
        for section in &plan.already_present {
            warn!("⏭️ {} 末尾已有练习，跳过", section.title);
            report.push(format!("⏭️ {} (已存在，跳过)", section.title));
        }

        let matched: Vec<&str> = plan
            .insertions
            .iter()
            .map(|i| i.section.title.as_str())
            .chain(plan.already_present.iter().map(|s| s.title.as_str()))
            .collect();
        for exercise in self.catalog.exercises() {
            if matched.contains(&exercise.title.as_str()) {
                continue;
            }
            // 标题存在但落在已匹配章节内部，扫描时被整体跳过
            let nested = notebook.cells().iter().any(|cell| {
                cell.is_markdown() && starts_with_heading_line(&cell.source_text(), &exercise.title)
            });
            if nested {
                info!("⏭️ {} 位于已匹配章节内，跳过", exercise.title);
                report.push(format!("· {} (位于已匹配章节内，跳过)", exercise.title));
            } else {
                report.push(format!("· {} (未找到章节)", exercise.title));
            }
        }

        if plan.is_empty() {
            return report;
        }

        let before = notebook.len();
        let cells = notebook.cells().to_vec();
        notebook.replace_cells(apply_plan(cells, &plan));
        report.changes = plan.added_cells();

        info!(
            "单元格数: {} -> {} (新增 {})",
            before,
            notebook.len(),
            report.changes
        );
        report.push(format!("共插入 {} 道练习 ({} 个单元格)", plan.insertions.len(), report.changes));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{builtin_catalog, Cell, Exercise};

    #[test]
    fn test_run_with_builtin_catalog() {
        let mut nb = Notebook::with_cells(vec![
            Cell::new_markdown("## Lists"),
            Cell::new_markdown("### Basic List Creation"),
            Cell::new_code("x = [1, 2]", &[]),
            Cell::new_markdown("### List Comprehension"),
            Cell::new_code("[x for x in y]", &[]),
        ]);
        let flow = InjectFlow::new(builtin_catalog().unwrap());
        let report = flow.run(&mut nb);

        assert_eq!(report.changes, 4);
        assert_eq!(nb.len(), 9);
        assert!(nb.cells()[3]
            .source_text()
            .starts_with("# Exercise: Create Different Types of Lists"));
        assert!(nb.cells()[8].source_text().starts_with("# Solution\ncubes"));
    }

    #[test]
    fn test_run_without_matches_reports_no_change() {
        let original = Notebook::with_cells(vec![Cell::new_markdown("### Something else")]);
        let mut nb = original.clone();
        let catalog = ExerciseCatalog::new(vec![Exercise::new("### A", "q", "s")]).unwrap();
        let report = InjectFlow::new(catalog).run(&mut nb);

        assert!(!report.is_changed());
        assert_eq!(nb, original);
        assert_eq!(report.lines, ["· ### A (未找到章节)"]);
    }

    #[test]
    fn test_nested_title_is_reported_as_skipped() {
        let mut nb = Notebook::with_cells(vec![
            Cell::new_markdown("## Lists"),
            Cell::new_markdown("### Basic List Creation"),
            Cell::new_code("x = [1, 2]", &[]),
        ]);
        let catalog = ExerciseCatalog::new(vec![
            Exercise::new("## Lists", "# Exercise: review", "# Solution\npass"),
            Exercise::new("### Basic List Creation", "q", "s"),
        ])
        .unwrap();
        let report = InjectFlow::new(catalog).run(&mut nb);

        assert_eq!(report.changes, 2);
        assert_eq!(nb.len(), 5);
        assert!(report
            .lines
            .contains(&"· ### Basic List Creation (位于已匹配章节内，跳过)".to_string()));
        assert!(!report.lines.iter().any(|l| l.contains("未找到章节")));
    }
}
