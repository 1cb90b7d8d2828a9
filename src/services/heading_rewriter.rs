//! 标题改写服务 - 业务能力层
//!
//! - `to_html_headings`: `### ` / `#### ` 标题行改成 `<h3>` / `<h4>`
//! - `demote_h2`: "Exercises" 之前不在保留列表中的二级标题降为三级

use crate::models::Notebook;
use std::collections::HashSet;

/// 一行的改动
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 单元格编号（从1开始）
    pub cell_number: usize,
    pub old: String,
    pub new: String,
}

/// 把单行 Markdown 标题转换为 HTML 标题，保留行尾换行
pub fn convert_line(line: &str) -> String {
    let stripped = line.trim_end_matches('\n');
    let nl = if line.ends_with('\n') { "\n" } else { "" };

    if let Some(text) = stripped.strip_prefix("#### ") {
        format!("<h4>{}</h4>{}", text.trim(), nl)
    } else if let Some(text) = stripped.strip_prefix("### ") {
        format!("<h3>{}</h3>{}", text.trim(), nl)
    } else {
        line.to_string()
    }
}

/// 对所有 Markdown 单元格逐行改写，返回改动列表
fn rewrite_markdown_lines<F>(notebook: &mut Notebook, mut rewrite: F) -> Vec<LineChange>
where
    F: FnMut(&str) -> String,
{
    let mut changes = Vec::new();

    for (index, cell) in notebook.cells_mut().iter_mut().enumerate() {
        if !cell.is_markdown() {
            continue;
        }
        let mut changed = false;
        let lines: Vec<String> = cell
            .source_lines()
            .into_iter()
            .map(|line: String| {
                let new_line = rewrite(&line);
                if new_line != line {
                    changed = true;
                    changes.push(LineChange {
                        cell_number: index + 1,
                        old: line,
                        new: new_line.clone(),
                    });
                }
                new_line
            })
            .collect();
        if changed {
            cell.set_source_lines(lines);
        }
    }

    changes
}

/// 将三、四级 Markdown 标题改为 HTML 标题
pub fn to_html_headings(notebook: &mut Notebook) -> Vec<LineChange> {
    rewrite_markdown_lines(notebook, convert_line)
}

/// 在第一个 "Exercises" 标题之前，把不在 `keep` 中的二级标题降为三级
///
/// `keep` 按小写比较
pub fn demote_h2(notebook: &mut Notebook, keep: &HashSet<String>) -> Vec<LineChange> {
    let mut before_exercises = true;

    rewrite_markdown_lines(notebook, |line| {
        let stripped = line.trim_start();
        if !stripped.starts_with('#') {
            return line.to_string();
        }
        let leading_ws = &line[..line.len() - stripped.len()];
        let hashes = stripped.chars().take_while(|&c| c == '#').count();
        let rest = &stripped[hashes..];
        let heading_text = rest.trim().to_lowercase();

        if before_exercises && heading_text == "exercises" {
            before_exercises = false;
        }
        if before_exercises && hashes == 2 && !keep.contains(&heading_text) {
            format!("{}###{}", leading_ws, rest)
        } else {
            line.to_string()
        }
    })
}
