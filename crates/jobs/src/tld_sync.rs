use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use uns_resolver_application::use_cases::SyncTldsUseCase;

/// Background job that periodically refreshes the supported-TLD cache.
///
///   - `Arc<Self>` spawn so the job owns its state across ticks
///   - First tick consumed so no refetch happens at startup (the lookup
///     path bootstraps an empty cache on demand)
///   - Default interval: 7 days (604 800 s)
pub struct TldSyncJob {
    sync: Arc<SyncTldsUseCase>,
    interval_secs: u64,
    cancel: CancellationToken,
}

impl TldSyncJob {
    pub fn new(sync: Arc<SyncTldsUseCase>) -> Self {
        Self {
            sync,
            interval_secs: 604_800,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting TLD sync job");

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        interval.tick().await;

        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    info!("TldSyncJob: shutdown requested");
                    return;
                }
                _ = interval.tick() => {}
            }

            match self.sync.execute().await {
                Ok(count) => info!(count, "TldSyncJob: refresh completed"),
                Err(e) => error!(error = %e, "TldSyncJob: refresh failed"),
            }
        }
    }
}
