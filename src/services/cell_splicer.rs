//! 单元格拼接 - 业务能力层
//!
//! 分两步：
//! 1. `plan_insertions` 纯函数，根据章节列表得到插入计划
//! 2. `apply_plan` 一次遍历重建单元格序列
//!
//! 只会新增单元格，不会删除或重排原有单元格

use crate::models::{Cell, Exercise, ExerciseCatalog, QUESTION_TAG, SOLUTION_TAG};
use crate::services::section_locator::Section;
use tracing::debug;

/// 一次插入：在 `section.span.end` 之前放入题目和答案两个单元格
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub section: Section,
    pub exercise: Exercise,
}

impl Insertion {
    /// 插入位置（原序列中的索引）
    pub fn at(&self) -> usize {
        self.section.span.end
    }
}

/// 插入计划
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertionPlan {
    /// 按插入位置递增排列
    pub insertions: Vec<Insertion>,
    /// 末尾已经有练习对的章节
    pub already_present: Vec<Section>,
}

impl InsertionPlan {
    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty()
    }

    /// 应用后新增的单元格数
    pub fn added_cells(&self) -> usize {
        self.insertions.len() * 2
    }
}

/// 创建题目单元格（交互式）
pub fn question_cell(exercise: &Exercise) -> Cell {
    Cell::new_code(&exercise.question, &[QUESTION_TAG])
}

/// 创建答案单元格（默认隐藏）
pub fn solution_cell(exercise: &Exercise) -> Cell {
    Cell::new_code(&exercise.solution, &[SOLUTION_TAG])
}

/// 章节末尾是否已经是一对练习单元格
pub fn has_trailing_exercise_pair(cells: &[Cell], section: &Section) -> bool {
    let span = section.span;
    if span.content_len() < 2 {
        return false;
    }
    let question = &cells[span.end - 2];
    let solution = &cells[span.end - 1];
    question.is_code()
        && question.has_tag(QUESTION_TAG)
        && solution.is_code()
        && solution.has_tag(SOLUTION_TAG)
}

/// 根据定位到的章节生成插入计划
///
/// 末尾已有练习对的章节会被跳过，重复运行不会再次插入
pub fn plan_insertions(
    cells: &[Cell],
    sections: Vec<Section>,
    catalog: &ExerciseCatalog,
) -> InsertionPlan {
    let mut plan = InsertionPlan::default();

    for section in sections {
        if has_trailing_exercise_pair(cells, &section) {
            debug!("章节 {:?} 末尾已有练习，跳过", section.title);
            plan.already_present.push(section);
            continue;
        }
        let Some(exercise) = catalog.get(&section.title) else {
            continue;
        };
        plan.insertions.push(Insertion {
            exercise: exercise.clone(),
            section,
        });
    }

    plan.insertions.sort_by_key(Insertion::at);
    plan
}

/// 按计划重建单元格序列
pub fn apply_plan(cells: Vec<Cell>, plan: &InsertionPlan) -> Vec<Cell> {
    let mut result = Vec::with_capacity(cells.len() + plan.added_cells());
    let mut pending = plan.insertions.iter().peekable();

    for (index, cell) in cells.into_iter().enumerate() {
        while let Some(insertion) = pending.next_if(|i| i.at() == index) {
            result.push(question_cell(&insertion.exercise));
            result.push(solution_cell(&insertion.exercise));
        }
        result.push(cell);
    }

    // 延伸到文档末尾的章节
    for insertion in pending {
        result.push(question_cell(&insertion.exercise));
        result.push(solution_cell(&insertion.exercise));
    }

    result
}
