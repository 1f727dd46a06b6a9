pub mod aggregator;
pub mod fetcher;
pub mod presenter;
pub mod registry;
pub mod throttle;

pub use crate::domain::model::{MarketReport, Order, OrderSide, Region, RegionResult};
pub use crate::domain::ports::{DeliveryChannel, Throttle};
pub use crate::utils::error::Result;
