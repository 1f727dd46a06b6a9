use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Invalid request URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Delivery failed: {message}")]
    DeliveryError { message: String },
}

impl MarketError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            MarketError::ConfigError { .. }
                | MarketError::ConfigValidationError { .. }
                | MarketError::InvalidConfigValueError { .. }
                | MarketError::MissingConfigError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MarketError::ApiError(_) | MarketError::UpstreamStatus { .. } => {
                "Could not reach the market API".to_string()
            }
            MarketError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            MarketError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
            MarketError::DeliveryError { .. } => "Could not deliver the market report".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MarketError::ApiError(_) | MarketError::UpstreamStatus { .. } => {
                "Check network connectivity and the api.base_url setting"
            }
            MarketError::UrlError(_) => "Check api.base_url is an absolute http(s) URL",
            MarketError::IoError(_) => "Check the config file path and its permissions",
            MarketError::DeliveryError { .. } => {
                "Check delivery.webhook_url and that the webhook still exists"
            }
            _ if self.is_config_error() => "Fix the configuration file and run again",
            _ => "Run again with --verbose for more details",
        }
    }
}

pub type Result<T> = std::result::Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_classified() {
        let err = MarketError::MissingConfigError {
            field: "api.base_url".to_string(),
        };
        assert!(err.is_config_error());
        assert_eq!(
            err.user_friendly_message(),
            "Configuration field 'api.base_url' is required"
        );

        let err = MarketError::DeliveryError {
            message: "boom".to_string(),
        };
        assert!(!err.is_config_error());
        assert!(err.recovery_suggestion().contains("webhook_url"));
    }
}
