use crate::error::{AppResult, CatalogError};
use crate::models::heading::{heading_depth, heading_text};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 一道练习：按章节标题挂载的题目和答案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// 完整的 Markdown 标题行，如 "### List Comprehension"
    pub title: String,
    pub question: String,
    pub solution: String,
}

impl Exercise {
    pub fn new(
        title: impl Into<String>,
        question: impl Into<String>,
        solution: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            question: question.into(),
            solution: solution.into(),
        }
    }

    /// 标题的层级（`#` 的个数）
    pub fn depth(&self) -> usize {
        heading_depth(&self.title).unwrap_or(0)
    }
}

/// 练习目录，保持定义顺序
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseCatalog {
    #[serde(rename = "exercise", default)]
    exercises: Vec<Exercise>,
}

impl ExerciseCatalog {
    /// 创建目录并校验标题
    pub fn new(exercises: Vec<Exercise>) -> AppResult<Self> {
        let catalog = Self { exercises };
        catalog.validate()?;
        Ok(catalog)
    }

    /// 校验：非空、标题均为 Markdown 标题、标题不重复
    pub fn validate(&self) -> AppResult<()> {
        if self.exercises.is_empty() {
            return Err(CatalogError::Empty.into());
        }

        let mut seen = HashSet::new();
        for exercise in &self.exercises {
            let title = exercise.title.trim();
            let has_text = heading_text(title).is_some_and(|text| !text.is_empty());
            if title != exercise.title || title.contains('\n') || !has_text {
                return Err(CatalogError::InvalidTitle {
                    title: exercise.title.clone(),
                }
                .into());
            }
            if !seen.insert(title) {
                return Err(CatalogError::DuplicateTitle {
                    title: exercise.title.clone(),
                }
                .into());
            }
        }
        Ok(())
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn get(&self, title: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.title == title)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_valid_catalog() {
        let catalog = ExerciseCatalog::new(vec![
            Exercise::new("### Basic List Creation", "q1", "s1"),
            Exercise::new("## Lists", "q2", "s2"),
        ])
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("## Lists").unwrap().depth(), 2);
        assert!(catalog.get("### Missing").is_none());
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let err = ExerciseCatalog::new(vec![
            Exercise::new("### A", "q", "s"),
            Exercise::new("### A", "q", "s"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Catalog(CatalogError::DuplicateTitle { .. })
        ));
    }

    #[test]
    fn test_invalid_titles_rejected() {
        for title in ["Basic List Creation", "###", "### ", " ### A", "#hashtag"] {
            let err = ExerciseCatalog::new(vec![Exercise::new(title, "q", "s")]).unwrap_err();
            assert!(
                matches!(err, AppError::Catalog(CatalogError::InvalidTitle { .. })),
                "标题 {:?} 应该被拒绝",
                title
            );
        }
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = ExerciseCatalog::new(Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::Catalog(CatalogError::Empty)));
    }
}
