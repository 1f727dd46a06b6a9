use crate::config::toml_config::MarketConfig;
use crate::domain::model::{DeliveryPayload, Embed};
use crate::domain::ports::DeliveryChannel;
use crate::utils::error::{MarketError, Result};
use crate::utils::validation::validate_required_field;
use reqwest::Client;
use serde::Serialize;

/// Posts reports to a chat webhook (Discord-compatible body).
#[derive(Debug, Clone)]
pub struct WebhookChannel {
    http: Client,
    url: String,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum WebhookBody<'a> {
    Embeds { embeds: [&'a Embed; 1] },
    Content { content: &'a str },
}

impl WebhookChannel {
    pub fn new(url: String) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }

    pub fn from_config(config: &MarketConfig) -> Result<Self> {
        let url = config.webhook_url().map(str::to_string);
        let url = validate_required_field("delivery.webhook_url", &url)?;
        Ok(Self::new(url.clone()))
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DeliveryChannel for WebhookChannel {
    async fn send(&self, payload: &DeliveryPayload) -> Result<()> {
        let body = match payload {
            DeliveryPayload::Embed(embed) => WebhookBody::Embeds { embeds: [embed] },
            DeliveryPayload::Text(text) => WebhookBody::Content { content: text },
        };

        let resp = self.http.post(&self.url).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(MarketError::DeliveryError {
                message: format!("webhook returned {}: {}", status, text),
            });
        }
        Ok(())
    }
}
