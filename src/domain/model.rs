use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub id: u64,
}

impl Region {
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

/// 上游訂單只取 price，其餘欄位忽略
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Order {
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Sell,
    Buy,
}

impl OrderSide {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            OrderSide::Sell => "sell",
            OrderSide::Buy => "buy",
        }
    }

    pub fn no_orders_label(&self) -> &'static str {
        match self {
            OrderSide::Sell => "No Sell Orders",
            OrderSide::Buy => "No Buy Orders",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionStatus {
    Ok,
    /// 上游有回應但狀態碼不是 200
    PartialError { sell_status: u16, buy_status: u16 },
    /// 連線失敗、5xx 或其他例外
    FullError { reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionResult {
    pub region_name: String,
    /// `None` 表示該方向沒有訂單（或該區域發生錯誤）
    pub sell_price: Option<f64>,
    pub buy_price: Option<f64>,
    pub status: RegionStatus,
}

impl RegionResult {
    pub fn priced(region_name: &str, sell_price: Option<f64>, buy_price: Option<f64>) -> Self {
        Self {
            region_name: region_name.to_string(),
            sell_price,
            buy_price,
            status: RegionStatus::Ok,
        }
    }

    pub fn partial_error(region_name: &str, sell_status: u16, buy_status: u16) -> Self {
        Self {
            region_name: region_name.to_string(),
            sell_price: None,
            buy_price: None,
            status: RegionStatus::PartialError {
                sell_status,
                buy_status,
            },
        }
    }

    pub fn full_error(region_name: &str, reason: impl Into<String>) -> Self {
        Self {
            region_name: region_name.to_string(),
            sell_price: None,
            buy_price: None,
            status: RegionStatus::FullError {
                reason: reason.into(),
            },
        }
    }

    pub fn has_orders(&self) -> bool {
        self.status == RegionStatus::Ok && (self.sell_price.is_some() || self.buy_price.is_some())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketReport {
    pub item_name: String,
    pub quantity: u32,
    pub region_results: Vec<RegionResult>,
    pub has_any_data: bool,
}

impl MarketReport {
    pub fn new(item_name: &str, quantity: u32, region_results: Vec<RegionResult>) -> Self {
        let has_any_data = region_results.iter().any(RegionResult::has_orders);
        Self {
            item_name: item_name.to_string(),
            quantity,
            region_results,
            has_any_data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub timestamp: DateTime<Utc>,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryPayload {
    Embed(Embed),
    Text(String),
}
