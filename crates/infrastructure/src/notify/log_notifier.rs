use async_trait::async_trait;
use tracing::warn;
use uns_resolver_application::ports::Notifier;

/// Notifier adapter for hosts without an in-app notification surface: the
/// message lands in the log stream at warn level. Fire-and-forget by
/// construction, nothing to fail.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, message: &str) {
        warn!(%message, "User notification");
    }
}
