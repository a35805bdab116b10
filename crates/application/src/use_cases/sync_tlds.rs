use crate::ports::{Notifier, RegistryPort, TldRepository};
use std::sync::Arc;
use tracing::{info, warn};
use uns_resolver_domain::{DomainError, SupportedTlds, EXPECTED_TLD_COUNT};

/// Freshness cycle: refetch the registry's TLD list, warn the user when its
/// size drifts from the compiled expectation, and replace the cached set.
/// A failed fetch leaves the existing cache untouched and sends nothing.
pub struct SyncTldsUseCase {
    registry: Arc<dyn RegistryPort>,
    tlds: Arc<dyn TldRepository>,
    notifier: Arc<dyn Notifier>,
}

impl SyncTldsUseCase {
    pub fn new(
        registry: Arc<dyn RegistryPort>,
        tlds: Arc<dyn TldRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            registry,
            tlds,
            notifier,
        }
    }

    /// Returns the size of the freshly cached set.
    pub async fn execute(&self) -> Result<usize, DomainError> {
        let fetched = self.registry.supported_tlds().await?;

        if fetched.len() != EXPECTED_TLD_COUNT {
            warn!(
                fetched = fetched.len(),
                expected = EXPECTED_TLD_COUNT,
                "Supported TLD count drifted from compiled expectation"
            );
            // Advisory only; resolution keeps running on the fetched list.
            self.notifier
                .notify(&format!(
                    "Unstoppable Domains now supports {} TLDs but this build expects {}. \
                     An update may be needed for new domain endings to resolve.",
                    fetched.len(),
                    EXPECTED_TLD_COUNT
                ))
                .await;
        }

        let set = SupportedTlds::new(fetched);
        self.tlds.save(&set).await?;
        info!(count = set.len(), "Supported TLD cache refreshed");
        Ok(set.len())
    }
}
