use crate::cli::GlobalArgs;
use crate::services::notebook_writer::DEFAULT_INDENT;

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// 写回笔记本时的缩进宽度
    pub indent_width: usize,
    /// 只预览，不写回文件
    pub dry_run: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 处理报告文件，为 `None` 时不写报告
    pub report_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT,
            dry_run: false,
            verbose_logging: false,
            report_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            indent_width: std::env::var("NOTEBOOK_INDENT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.indent_width),
            dry_run: std::env::var("DRY_RUN").ok().and_then(|v| v.parse().ok()).unwrap_or(default.dry_run),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            report_file: std::env::var("REPORT_FILE").ok().filter(|v| !v.is_empty()).or(default.report_file),
        }
    }

    /// 命令行参数覆盖环境变量
    pub fn with_args(mut self, args: &GlobalArgs) -> Self {
        if let Some(indent) = args.indent {
            self.indent_width = indent;
        }
        if args.dry_run {
            self.dry_run = true;
        }
        if args.verbose {
            self.verbose_logging = true;
        }
        if let Some(report) = &args.report {
            self.report_file = Some(report.clone());
        }
        self
    }
}
