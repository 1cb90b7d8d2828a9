//! 单个笔记本处理器
//!
//! 加载 → 流程 → 写回，一次阻塞调用链

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::models::{load_notebook, Notebook};
use crate::services::NotebookWriter;
use crate::utils::logging::{log_command_complete, log_startup};
use crate::workflow::{FlowReport, NotebookCtx};

/// 处理单个笔记本
///
/// # 参数
/// - `ctx`: 笔记本上下文
/// - `command`: 子命令名称（用于日志）
/// - `config`: 配置
/// - `flow`: 在内存中修改笔记本并返回结果
///
/// # 返回
/// 返回处理结果；只有存在改动且不是预览模式时才写回
pub fn process_notebook<F>(
    ctx: &NotebookCtx,
    command: &str,
    config: &Config,
    flow: F,
) -> Result<FlowReport>
where
    F: FnOnce(&mut Notebook) -> FlowReport,
{
    log_startup(command, ctx, config.dry_run);

    let mut notebook = load_notebook(&ctx.source)
        .with_context(|| format!("{} 无法加载笔记本", ctx))?;

    let report = flow(&mut notebook);

    let written = if !report.is_changed() {
        info!("{} 没有改动，不写回文件", ctx);
        false
    } else if config.dry_run {
        info!("{} 预览模式，跳过写回", ctx);
        false
    } else {
        NotebookWriter::new(config.indent_width)
            .write(&notebook, ctx.target())
            .with_context(|| format!("{} 无法写入 {}", ctx, ctx.target().display()))?;
        true
    };

    log_command_complete(ctx, &report, written);
    Ok(report)
}
