//! 日志工具模块
//!
//! 提供日志格式化、报告文件输出的辅助函数

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::info;

use crate::workflow::{FlowReport, NotebookCtx};

/// 初始化报告文件
///
/// 已有内容保留，本次运行的表头追加在末尾
///
/// # 参数
/// - `report_file_path`: 报告文件路径
pub fn init_report_file(report_file_path: &str) -> Result<()> {
    let header = format!(
        "{}\n笔记本处理报告 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(report_file_path)?;
    file.write_all(header.as_bytes())?;
    Ok(())
}

/// 把一次处理结果追加到报告文件
///
/// # 参数
/// - `report_file_path`: 报告文件路径
/// - `ctx`: 笔记本上下文
/// - `report`: 处理结果
pub fn append_report(report_file_path: &str, ctx: &NotebookCtx, report: &FlowReport) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(report_file_path)?;

    writeln!(file, "{} {}", ctx, report.command)?;
    for line in &report.lines {
        writeln!(file, "{}", line)?;
    }
    writeln!(file, "改动: {}\n", report.changes)?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `command`: 子命令名称
/// - `ctx`: 笔记本上下文
/// - `dry_run`: 是否只预览
pub fn log_startup(command: &str, ctx: &NotebookCtx, dry_run: bool) {
    info!("{}", "=".repeat(60));
    info!("🚀 {} {}", command, ctx.source.display());
    if dry_run {
        info!("👀 预览模式：不会写回任何文件");
    }
    info!("{}", "=".repeat(60));
}

/// 记录命令完成信息
///
/// # 参数
/// - `ctx`: 笔记本上下文
/// - `report`: 处理结果
/// - `written`: 是否写回了文件
pub fn log_command_complete(ctx: &NotebookCtx, report: &FlowReport, written: bool) {
    info!("{}", "─".repeat(60));
    if written {
        info!("✅ {} 完成: {} 处改动已写入 {}", ctx, report.changes, ctx.target().display());
    } else if report.is_changed() {
        info!("✅ {} 完成: {} 处改动（未写入）", ctx, report.changes);
    } else {
        info!("✅ {} 完成: 没有改动", ctx);
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
