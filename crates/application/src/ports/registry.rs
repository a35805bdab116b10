use async_trait::async_trait;
use uns_resolver_domain::{DomainError, RecordSet};

/// The naming registry's REST surface as this adapter consumes it.
#[async_trait]
pub trait RegistryPort: Send + Sync {
    /// Current supported-TLD list. Not debounced; used by the sync cycle and
    /// the empty-cache bootstrap.
    async fn supported_tlds(&self) -> Result<Vec<String>, DomainError>;

    /// Raw record set for `domain` (original casing).
    async fn resolve(&self, domain: &str) -> Result<RecordSet, DomainError>;
}
