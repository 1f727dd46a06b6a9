pub mod cli;
pub mod toml_config;
pub mod webhook;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "tradehub-prices")]
#[command(about = "Best buy/sell prices for an item across the main trade hubs")]
pub struct CliConfig {
    /// Item name shown in the report title
    pub item_name: String,

    #[arg(long, help = "Market type id of the item")]
    pub type_id: u64,

    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub quantity: u32,

    #[arg(long, help = "Path to a TOML config file (defaults to the built-in trade hubs)")]
    pub config: Option<String>,

    #[arg(long, help = "Deliver to this chat webhook instead of stdout")]
    pub webhook_url: Option<String>,

    #[arg(long, help = "Emit JSON log lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_defaults_to_one() {
        let cli = CliConfig::try_parse_from(["tradehub-prices", "Tritanium", "--type-id", "34"])
            .unwrap();
        assert_eq!(cli.quantity, 1);
        assert_eq!(cli.type_id, 34);
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let result = CliConfig::try_parse_from([
            "tradehub-prices",
            "Tritanium",
            "--type-id",
            "34",
            "--quantity",
            "0",
        ]);
        assert!(result.is_err());
    }
}
