use ai_detector::{logger, tui, utils, Config};
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logger::init(&config)?;
    utils::logging::log_startup(&config);

    // 运行终端界面
    tui::run(&config).await?;

    Ok(())
}
