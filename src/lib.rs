//! # Add Notebook Exercises
//!
//! 一个用于维护课程笔记本（.ipynb）的 Rust 命令行工具
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 数据模型层（Models）
//! - `models/` - 笔记本、单元格、练习目录，以及它们的加载器
//! - `Notebook` - 有序单元格序列，未触及的字段原样保留
//! - `ExerciseCatalog` - 标题 → (题目, 答案) 的练习目录，从 TOML 注入
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务只做一件事
//! - `section_locator` / `span_finder` - 找章节和章节范围
//! - `cell_splicer` - 先生成插入计划，再一次性重建单元格序列
//! - `notebook_writer` - 原子写回
//! - `structure_analyzer` / `heading_rewriter` - 维护类能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个命令作用于一个笔记本"的完整流程
//! - `InjectFlow` - 定位 → 计划 → 拼接
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 按子命令调度
//! - `orchestrator/notebook_processor` - 加载 → 流程 → 写回
//!
//! ## 模块结构

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Cell, CellKind, Exercise, ExerciseCatalog, Notebook};
pub use orchestrator::App;
pub use workflow::{FlowReport, InjectFlow, NotebookCtx};
