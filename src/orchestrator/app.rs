use anyhow::Result;
use tracing::warn;

use crate::cli::Command;
use crate::config::Config;
use crate::models::{builtin_catalog, load_catalog};
use crate::orchestrator::notebook_processor::process_notebook;
use crate::utils::logging::{append_report, init_report_file};
use crate::workflow::maintenance_flow::{run_analyze, run_demote_h2, run_html_headings};
use crate::workflow::{FlowReport, InjectFlow, NotebookCtx};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        if let Some(report_file) = &config.report_file {
            init_report_file(report_file)?;
        }
        Ok(Self { config })
    }

    /// 运行一个子命令
    pub fn run(&self, command: &Command) -> Result<FlowReport> {
        let ctx = NotebookCtx::new(command.notebook().clone(), command.output().cloned());

        let report = match command {
            Command::Inject { catalog, .. } => {
                // 目录先于笔记本加载，目录有误时不碰笔记本
                let catalog = match catalog {
                    Some(path) => load_catalog(path)?,
                    None => builtin_catalog()?,
                };
                let flow = InjectFlow::new(catalog);
                process_notebook(&ctx, command.name(), &self.config, |nb| flow.run(nb))?
            }
            Command::Analyze { .. } => {
                process_notebook(&ctx, command.name(), &self.config, |nb| run_analyze(nb))?
            }
            Command::HtmlHeadings { .. } => {
                process_notebook(&ctx, command.name(), &self.config, run_html_headings)?
            }
            Command::DemoteH2 { keep, .. } => {
                process_notebook(&ctx, command.name(), &self.config, |nb| {
                    run_demote_h2(nb, keep)
                })?
            }
        };

        print_report(&ctx, &report, &self.config);

        if let Some(report_file) = &self.config.report_file {
            if let Err(e) = append_report(report_file, &ctx, &report) {
                warn!("⚠️ 写入报告文件失败 {}: {}", report_file, e);
            }
        }

        Ok(report)
    }
}

/// 在控制台输出处理结果
fn print_report(ctx: &NotebookCtx, report: &FlowReport, config: &Config) {
    println!("{} {}", ctx, report.command);
    println!("{}", "=".repeat(60));
    for line in &report.lines {
        println!("{}", line);
    }
    println!("{}", "=".repeat(60));

    if report.command == "analyze" {
        return;
    }
    if !report.is_changed() {
        println!("没有需要修改的内容");
    } else if config.dry_run {
        println!("预览模式：{} 处改动未写入", report.changes);
    } else {
        println!("✅ {} 处改动已保存至 {}", report.changes, ctx.target().display());
    }
}
