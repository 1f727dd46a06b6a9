use anyhow::Result;
use std::time::Duration;
use tempfile::TempDir;
use tradehub_prices::utils::validation::Validate;
use tradehub_prices::{MarketConfig, MarketError};

#[test]
fn test_load_config_file_with_env_substitution() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("trade_hubs.toml");

    std::env::set_var(
        "TRADEHUB_PRICES_TEST_WEBHOOK",
        "https://chat.example/api/webhooks/42/secret",
    );

    std::fs::write(
        &config_path,
        r#"
[api]
user_agent = "market-bot/2.0 (ops@example.com)"

[throttle]
min_time_ms = 200

[delivery]
webhook_url = "${TRADEHUB_PRICES_TEST_WEBHOOK}"

[[regions]]
name = "Jita"
id = 10000002

[[regions]]
name = "Hek"
id = 10000042
"#,
    )?;

    let config = MarketConfig::from_file(&config_path)?;
    config.validate()?;

    assert_eq!(config.api.user_agent, "market-bot/2.0 (ops@example.com)");
    assert_eq!(config.api.base_url, "https://esi.evetech.net/latest");
    assert_eq!(config.min_time(), Duration::from_millis(200));
    assert_eq!(
        config.webhook_url(),
        Some("https://chat.example/api/webhooks/42/secret")
    );

    let registry = config.registry();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.find("hek").map(|r| r.id), Some(10000042));
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = MarketConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, MarketError::IoError(_)));
    assert!(err.recovery_suggestion().contains("config file"));
}
