use crate::domain::model::DeliveryPayload;
use crate::utils::error::Result;
use std::future::Future;

/// Outbound request throttle shared by every caller holding the same instance.
pub trait Throttle: Send + Sync {
    /// Resolves once the caller is admitted.
    fn admit(&self) -> impl Future<Output = ()> + Send;

    /// Runs `task` after admission; the task's output is returned untouched.
    fn schedule<F, Fut, T>(&self, task: F) -> impl Future<Output = T> + Send
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = T> + Send,
        T: Send,
    {
        async move {
            self.admit().await;
            task().await
        }
    }
}

pub trait DeliveryChannel: Send + Sync {
    fn send(&self, payload: &DeliveryPayload) -> impl Future<Output = Result<()>> + Send;
}
