//! Markdown 标题识别
//!
//! 标题标记：去掉前导空白后，1~6 个 `#`，后接空白或文本结束

use regex::Regex;
use std::sync::LazyLock;

static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})(?:\s|$)").expect("标题正则无效"));

/// 返回文本开头标题标记的层级（`#` 的个数），不是标题时返回 `None`
pub fn heading_depth(text: &str) -> Option<usize> {
    HEADING_MARKER
        .captures(text.trim_start())
        .map(|caps| caps[1].len())
}

/// 标题后的文字部分（去掉 `#` 和两端空白）
pub fn heading_text(text: &str) -> Option<&str> {
    let trimmed = text.trim_start();
    let depth = heading_depth(trimmed)?;
    let rest = &trimmed[depth..];
    Some(rest.lines().next().unwrap_or("").trim())
}

/// 文本的第一行是否恰好是给定标题行
///
/// 要求去掉前导空白后以 `title` 开头，且该行剩余部分只有空白，
/// 因此 "### Basic List Creation Extended" 不会匹配 "### Basic List Creation"
pub fn starts_with_heading_line(text: &str, title: &str) -> bool {
    match text.trim_start().strip_prefix(title) {
        Some(rest) => {
            let line_rest = rest.split('\n').next().unwrap_or("");
            line_rest.trim().is_empty()
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_depth() {
        assert_eq!(heading_depth("# Title"), Some(1));
        assert_eq!(heading_depth("  ### Basic List Creation"), Some(3));
        assert_eq!(heading_depth("###"), Some(3));
        assert_eq!(heading_depth("###### deep"), Some(6));
        assert_eq!(heading_depth("####### too deep"), None);
        assert_eq!(heading_depth("#hashtag"), None);
        assert_eq!(heading_depth("plain text"), None);
    }

    #[test]
    fn test_heading_text() {
        assert_eq!(heading_text("### List Operators\nbody"), Some("List Operators"));
        assert_eq!(heading_text("## Exercises  "), Some("Exercises"));
        assert_eq!(heading_text("not a heading"), None);
    }

    #[test]
    fn test_starts_with_heading_line_exact() {
        let title = "### Basic List Creation";
        assert!(starts_with_heading_line("### Basic List Creation", title));
        assert!(starts_with_heading_line("\n### Basic List Creation  \nLists are...", title));
        assert!(!starts_with_heading_line("### Basic List Creation Extended", title));
        assert!(!starts_with_heading_line("Intro\n### Basic List Creation", title));
    }
}
