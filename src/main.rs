use add_notebook_exercises::{logger, App, Cli, Config};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置，命令行参数优先
    let config = Config::from_env().with_args(&cli.global);

    // 初始化日志
    logger::init(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)?.run(&cli.command)?;

    Ok(())
}
