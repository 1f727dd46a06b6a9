use crate::core::aggregator::price_label;
use crate::domain::model::{
    DeliveryPayload, Embed, EmbedField, MarketReport, OrderSide, RegionResult, RegionStatus,
};
use crate::domain::ports::DeliveryChannel;
use chrono::Utc;

pub const EMBED_COLOR: u32 = 0x0099ff;
pub const EMBED_DESCRIPTION: &str = "Real-time market prices from major trade hubs";
pub const STATUS_ERROR_TEXT: &str = "⚠️ Error fetching data";
pub const FAILURE_ERROR_TEXT: &str = "❗ Error fetching data";

pub fn title(item_name: &str, quantity: u32) -> String {
    if quantity > 1 {
        format!("📊 Market Orders for \"{}\" ×{}", item_name, quantity)
    } else {
        format!("📊 Market Orders for \"{}\"", item_name)
    }
}

pub fn no_data_message(item_name: &str) -> String {
    format!(
        "❌ No market data found for \"{}\" in any trade hubs. ❌",
        item_name
    )
}

fn region_field(result: &RegionResult) -> EmbedField {
    let value = match &result.status {
        RegionStatus::Ok => format!(
            "Sell: {} ISK\nBuy: {} ISK",
            price_label(result.sell_price, OrderSide::Sell),
            price_label(result.buy_price, OrderSide::Buy)
        ),
        RegionStatus::PartialError { .. } => STATUS_ERROR_TEXT.to_string(),
        RegionStatus::FullError { .. } => FAILURE_ERROR_TEXT.to_string(),
    };

    EmbedField {
        name: result.region_name.to_uppercase(),
        value,
        inline: true,
    }
}

pub fn present(report: &MarketReport) -> DeliveryPayload {
    if !report.has_any_data {
        return DeliveryPayload::Text(no_data_message(&report.item_name));
    }

    DeliveryPayload::Embed(Embed {
        title: title(&report.item_name, report.quantity),
        description: EMBED_DESCRIPTION.to_string(),
        color: EMBED_COLOR,
        timestamp: Utc::now(),
        fields: report.region_results.iter().map(region_field).collect(),
    })
}

/// Plain-text rendering for channels without embed support.
pub fn render_text(payload: &DeliveryPayload) -> String {
    match payload {
        DeliveryPayload::Text(text) => text.clone(),
        DeliveryPayload::Embed(embed) => {
            let mut out = String::new();
            out.push_str(&embed.title);
            out.push('\n');
            out.push_str(&embed.description);
            out.push('\n');
            for field in &embed.fields {
                out.push('\n');
                out.push_str(&field.name);
                out.push('\n');
                out.push_str(&field.value);
                out.push('\n');
            }
            out.push_str(&format!("\n{}", embed.timestamp.format("%Y-%m-%d %H:%M:%S UTC")));
            out
        }
    }
}

/// 傳送失敗只記錄，不重試也不往上拋
pub async fn deliver<C: DeliveryChannel>(channel: &C, payload: &DeliveryPayload) -> bool {
    match channel.send(payload).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Error sending message: {}", e);
            false
        }
    }
}
