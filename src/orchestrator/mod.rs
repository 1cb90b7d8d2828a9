//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 持有配置，按子命令选择流程
//! - 加载练习目录（注入的配置，而不是写死的常量）
//! - 输出控制台报告和报告文件
//!
//! ### `notebook_processor` - 单个笔记本处理器
//! - 完整读入笔记本
//! - 在内存中运行流程
//! - 有改动时原子写回
//!
//! ## 层次关系
//!
//! ```text
//! app (选择子命令)
//!     ↓
//! notebook_processor (加载 / 写回)
//!     ↓
//! workflow (InjectFlow / maintenance_flow)
//!     ↓
//! services (locator / span / splicer / writer / analyzer / rewriter)
//!     ↓
//! models (Notebook / Cell / ExerciseCatalog)
//! ```

pub mod app;
pub mod notebook_processor;

pub use app::App;
pub use notebook_processor::process_notebook;
