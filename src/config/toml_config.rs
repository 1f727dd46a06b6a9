use crate::core::registry::{RegionRegistry, TRADE_HUBS};
use crate::domain::model::Region;
use crate::utils::error::{MarketError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_unique_names, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://esi.evetech.net/latest";
pub const DEFAULT_DATASOURCE: &str = "tranquility";
pub const DEFAULT_USER_AGENT: &str = "tradehub-prices/0.1 (market price bot)";
pub const DEFAULT_MIN_TIME_MS: u64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub throttle: ThrottleConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default = "default_regions")]
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_datasource")]
    pub datasource: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThrottleConfig {
    #[serde(default = "default_min_time_ms")]
    pub min_time_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeliveryConfig {
    pub webhook_url: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_datasource() -> String {
    DEFAULT_DATASOURCE.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_min_time_ms() -> u64 {
    DEFAULT_MIN_TIME_MS
}

fn default_regions() -> Vec<Region> {
    TRADE_HUBS
        .iter()
        .map(|(name, id)| Region::new(*name, *id))
        .collect()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            datasource: default_datasource(),
            user_agent: default_user_agent(),
            timeout_seconds: None,
        }
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            min_time_ms: DEFAULT_MIN_TIME_MS,
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            throttle: ThrottleConfig::default(),
            delivery: DeliveryConfig::default(),
            regions: default_regions(),
        }
    }
}

impl MarketConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MarketError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MarketError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DISCORD_WEBHOOK_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MarketError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn min_time(&self) -> Duration {
        Duration::from_millis(self.throttle.min_time_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.api.timeout_seconds.map(Duration::from_secs)
    }

    pub fn registry(&self) -> RegionRegistry {
        RegionRegistry::from_regions(self.regions.clone())
    }

    /// 空字串或未替換的 `${VAR}` 視為未設定
    pub fn webhook_url(&self) -> Option<&str> {
        self.delivery
            .webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty() && !url.starts_with("${"))
    }
}

impl Validate for MarketConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api.base_url)?;
        validate_non_empty_string("api.datasource", &self.api.datasource)?;
        validate_non_empty_string("api.user_agent", &self.api.user_agent)?;
        if let Some(timeout) = self.api.timeout_seconds {
            validate_positive_number("api.timeout_seconds", timeout, 1)?;
        }
        validate_positive_number("throttle.min_time_ms", self.throttle.min_time_ms, 1)?;

        if let Some(url) = self.webhook_url() {
            validate_url("delivery.webhook_url", url)?;
        }

        if self.regions.is_empty() {
            return Err(MarketError::MissingConfigError {
                field: "regions".to_string(),
            });
        }
        for region in &self.regions {
            validate_non_empty_string("regions.name", &region.name)?;
        }
        validate_unique_names("regions.name", self.regions.iter().map(|r| r.name.as_str()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_configuration() {
        let config = MarketConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.datasource, "tranquility");
        assert_eq!(config.min_time(), Duration::from_millis(100));
        assert_eq!(config.regions.len(), 5);
        assert_eq!(config.regions[0], Region::new("Jita", 10000002));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = MarketConfig::from_toml_str("").unwrap();
        assert_eq!(config, MarketConfig::default());
    }

    #[test]
    fn test_parse_full_document() {
        let config = MarketConfig::from_toml_str(
            r#"
[api]
base_url = "http://localhost:9000/v1"
datasource = "singularity"
user_agent = "test-agent/1.0"
timeout_seconds = 10

[throttle]
min_time_ms = 250

[delivery]
webhook_url = "https://discord.example/api/webhooks/1/abc"

[[regions]]
name = "Jita"
id = 10000002

[[regions]]
name = "Amarr"
id = 10000043
"#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:9000/v1");
        assert_eq!(config.api.datasource, "singularity");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.min_time(), Duration::from_millis(250));
        assert_eq!(
            config.webhook_url(),
            Some("https://discord.example/api/webhooks/1/abc")
        );
        let names: Vec<String> = config.registry().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Jita", "Amarr"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unresolved_webhook_placeholder_is_ignored() {
        let config = MarketConfig::from_toml_str(
            r#"
[delivery]
webhook_url = "${TRADEHUB_PRICES_TEST_UNSET_WEBHOOK}"
"#,
        )
        .unwrap();
        assert_eq!(config.webhook_url(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = MarketConfig::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = MarketConfig::default();
        config.regions.push(Region::new("jita", 1));
        assert!(config.validate().is_err());

        let mut config = MarketConfig::default();
        config.regions.clear();
        assert!(matches!(
            config.validate(),
            Err(MarketError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_zero_request_spacing() {
        let config = MarketConfig::from_toml_str("[throttle]\nmin_time_ms = 0").unwrap();
        assert_eq!(config.min_time(), Duration::ZERO);
        assert!(matches!(
            config.validate(),
            Err(MarketError::InvalidConfigValueError { field, .. }) if field == "throttle.min_time_ms"
        ));

        let config = MarketConfig::from_toml_str("[throttle]\nmin_time_ms = 1").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = MarketConfig::from_toml_str("[api\nbase_url = ").unwrap_err();
        assert!(matches!(err, MarketError::ConfigValidationError { .. }));
    }
}
