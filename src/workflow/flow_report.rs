/// 一次命令在单个笔记本上的处理结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowReport {
    /// 命令名称
    pub command: &'static str,
    /// 对笔记本的改动数（0 表示无需写回）
    pub changes: usize,
    /// 面向用户的报告行
    pub lines: Vec<String>,
}

impl FlowReport {
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            ..Default::default()
        }
    }

    pub fn is_changed(&self) -> bool {
        self.changes > 0
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}
