use clap::Parser;
use std::sync::Arc;
use tradehub_prices::utils::{logger, validation::Validate};
use tradehub_prices::{
    CliConfig, ConsoleChannel, MarketConfig, MarketError, MarketFetcher, RateLimiter,
    WebhookChannel,
};

fn load_config(cli: &CliConfig) -> Result<MarketConfig, MarketError> {
    let mut config = match &cli.config {
        Some(path) => MarketConfig::from_file(path)?,
        None => MarketConfig::default(),
    };

    // 命令列參數優先於設定檔
    if let Some(url) = &cli.webhook_url {
        config.delivery.webhook_url = Some(url.clone());
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting tradehub-prices");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 整個行程共用一個節流器
    let limiter = Arc::new(RateLimiter::new(config.min_time()));
    let fetcher = MarketFetcher::new(&config, limiter)?;

    match config.webhook_url() {
        Some(_) => {
            let channel = WebhookChannel::from_config(&config)?;
            tracing::debug!("Delivering report to webhook");
            fetcher
                .fetch_market_data_trade_hubs(&cli.item_name, cli.type_id, &channel, cli.quantity)
                .await;
        }
        None => {
            fetcher
                .fetch_market_data_trade_hubs(
                    &cli.item_name,
                    cli.type_id,
                    &ConsoleChannel::new(),
                    cli.quantity,
                )
                .await;
        }
    }

    Ok(())
}
