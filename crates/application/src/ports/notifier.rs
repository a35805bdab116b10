use async_trait::async_trait;

/// In-app user notification, fire-and-forget. Delivery failures are absorbed
/// by the adapter; no retry.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str);
}
