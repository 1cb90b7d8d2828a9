//! 日志初始化
//!
//! 日志输出到 stderr，stdout 只留给处理报告

use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// `RUST_LOG` 优先；否则默认 `info`，`verbose` 时为 `debug`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("add_notebook_exercises={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
