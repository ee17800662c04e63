use clap::Parser;
use tgs::utils::logger;
use tgs::CliConfig;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting tgs");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    tgs::app::run(config).await;
}
