use anyhow::Result;
use esa_address_book::app::{App, RunMode};
use esa_address_book::config::Config;
use esa_address_book::logger;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 选择运行模式（csv / json），默认处理 JSON 导出
    let mode = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => RunMode::Json,
    };

    App::new(config).run(mode).await
}
