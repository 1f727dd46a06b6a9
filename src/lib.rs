pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::ConsoleChannel, toml_config::MarketConfig, webhook::WebhookChannel};
pub use crate::core::{
    fetcher::MarketFetcher,
    registry::RegionRegistry,
    throttle::{NoopThrottle, RateLimiter},
};
pub use domain::model::{DeliveryPayload, MarketReport, RegionResult, RegionStatus};
pub use domain::ports::{DeliveryChannel, Throttle};
pub use utils::error::{MarketError, Result};
