use crate::config::toml_config::MarketConfig;
use crate::core::aggregator::total_price;
use crate::core::presenter::{deliver, present};
use crate::core::registry::RegionRegistry;
use crate::domain::model::{MarketReport, Order, OrderSide, Region, RegionResult};
use crate::domain::ports::{DeliveryChannel, Throttle};
use crate::utils::error::{MarketError, Result};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// 已回應的上游請求（狀態碼 < 500）
#[derive(Debug)]
struct OrdersResponse {
    status: u16,
    body: String,
}

/// Pulls sell/buy orders for one item from every configured region.
///
/// All outbound calls go through the shared throttle, so several fetchers
/// built on the same `Arc<T>` share one request budget.
pub struct MarketFetcher<T: Throttle> {
    client: Client,
    throttle: Arc<T>,
    base_url: String,
    datasource: String,
    user_agent: String,
    registry: RegionRegistry,
}

impl<T: Throttle> MarketFetcher<T> {
    pub fn new(config: &MarketConfig, throttle: Arc<T>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            throttle,
            base_url: config.api.base_url.clone(),
            datasource: config.api.datasource.clone(),
            user_agent: config.api.user_agent.clone(),
            registry: config.registry(),
        })
    }

    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    /// Fetches, renders and delivers the report. Never fails: region errors end
    /// up in the report, delivery errors in the log.
    pub async fn fetch_market_data_trade_hubs<C: DeliveryChannel>(
        &self,
        item_name: &str,
        type_id: u64,
        channel: &C,
        quantity: u32,
    ) {
        let report = self.fetch_report(item_name, type_id, quantity).await;
        let payload = present(&report);

        if deliver(channel, &payload).await {
            tracing::info!(
                "Delivered market report for \"{}\" ({} regions, has data: {})",
                item_name,
                report.region_results.len(),
                report.has_any_data
            );
        }
    }

    pub async fn fetch_report(&self, item_name: &str, type_id: u64, quantity: u32) -> MarketReport {
        let mut results = Vec::with_capacity(self.registry.len());
        for region in self.registry.iter() {
            results.push(self.fetch_region(item_name, region, type_id, quantity).await);
        }

        MarketReport::new(item_name, quantity, results)
    }

    async fn fetch_region(
        &self,
        item_name: &str,
        region: &Region,
        type_id: u64,
        quantity: u32,
    ) -> RegionResult {
        tracing::debug!("Fetching orders for type {} in {}", type_id, region.name);

        let (sell_res, buy_res) = match self.fetch_order_pair(region, type_id).await {
            Ok(pair) => pair,
            Err(e) => {
                tracing::error!(
                    "Error fetching market data for \"{}\" in {}: {}",
                    item_name,
                    region.name,
                    e
                );
                return RegionResult::full_error(&region.name, e.to_string());
            }
        };

        if sell_res.status != 200 || buy_res.status != 200 {
            tracing::error!(
                "Error fetching data for \"{}\" in region {} (statuses: {}, {})",
                item_name,
                region.name,
                sell_res.status,
                buy_res.status
            );
            return RegionResult::partial_error(&region.name, sell_res.status, buy_res.status);
        }

        let sell_orders = parse_orders(&sell_res.body);
        let buy_orders = parse_orders(&buy_res.body);
        tracing::debug!(
            "{}: {} sell / {} buy orders",
            region.name,
            sell_orders.len(),
            buy_orders.len()
        );

        RegionResult::priced(
            &region.name,
            total_price(&sell_orders, OrderSide::Sell, quantity),
            total_price(&buy_orders, OrderSide::Buy, quantity),
        )
    }

    /// Both sides are scheduled together and joined before returning.
    async fn fetch_order_pair(
        &self,
        region: &Region,
        type_id: u64,
    ) -> Result<(OrdersResponse, OrdersResponse)> {
        let sell_url = self.orders_url(region.id, type_id, OrderSide::Sell)?;
        let buy_url = self.orders_url(region.id, type_id, OrderSide::Buy)?;

        let (sell, buy) = tokio::join!(
            self.throttle.schedule(|| self.get_orders(sell_url)),
            self.throttle.schedule(|| self.get_orders(buy_url)),
        );

        Ok((sell?, buy?))
    }

    pub fn orders_url(&self, region_id: u64, type_id: u64, side: OrderSide) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/markets/{}/orders/",
            self.base_url.trim_end_matches('/'),
            region_id
        ))?;
        url.query_pairs_mut()
            .append_pair("datasource", &self.datasource)
            .append_pair("order_type", side.as_query_value())
            .append_pair("type_id", &type_id.to_string());
        Ok(url)
    }

    async fn get_orders(&self, url: Url) -> Result<OrdersResponse> {
        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status >= 500 {
            return Err(MarketError::UpstreamStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        Ok(OrdersResponse { status, body })
    }
}

/// 逐筆解碼；缺少數值 price 的元素略過
fn decode_orders(body: &str) -> Result<Vec<Order>> {
    let items: Vec<serde_json::Value> = serde_json::from_str(body)?;
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<Order>(item).ok())
        .collect())
}

/// 非陣列或格式錯誤的回應視為沒有訂單
pub fn parse_orders(body: &str) -> Vec<Order> {
    match decode_orders(body) {
        Ok(orders) => orders,
        Err(e) => {
            tracing::debug!("Unparseable orders body treated as empty: {}", e);
            Vec::new()
        }
    }
}
