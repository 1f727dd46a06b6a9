use crate::domain::ports::Throttle;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

pub const DEFAULT_MIN_TIME: Duration = Duration::from_millis(100);

/// Minimum-spacing throttle: consecutive admissions are at least `min_time`
/// apart, across every task sharing the instance.
///
/// Admission order is FIFO because `tokio::sync::Mutex` queues waiters
/// fairly and the lock is held until the caller's slot arrives.
#[derive(Debug)]
pub struct RateLimiter {
    min_time: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_time: Duration) -> Self {
        Self {
            min_time,
            next_slot: Mutex::new(None),
        }
    }

    pub fn min_time(&self) -> Duration {
        self.min_time
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TIME)
    }
}

impl Throttle for RateLimiter {
    async fn admit(&self) {
        let mut next_slot = self.next_slot.lock().await;
        if let Some(slot) = *next_slot {
            if slot > Instant::now() {
                tracing::trace!(
                    "Throttle waiting {:?}",
                    slot.saturating_duration_since(Instant::now())
                );
                sleep_until(slot).await;
            }
        }
        *next_slot = Some(Instant::now() + self.min_time);
    }
}

/// Admits immediately. Useful for tests and one-off tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopThrottle;

impl Throttle for NoopThrottle {
    async fn admit(&self) {}
}
