use async_trait::async_trait;
use uns_resolver_domain::{DomainError, SupportedTlds};

/// Persistence for the supported-TLD cache (host key/value state).
#[async_trait]
pub trait TldRepository: Send + Sync {
    /// Missing or shape-invalid state loads as the empty set; loading never
    /// fails the caller.
    async fn load(&self) -> SupportedTlds;

    async fn save(&self, tlds: &SupportedTlds) -> Result<(), DomainError>;
}
