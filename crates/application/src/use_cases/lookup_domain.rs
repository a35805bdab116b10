use crate::ports::{RegistryPort, TldRepository};
use std::sync::Arc;
use tracing::{debug, warn};
use uns_resolver_domain::address_rules;
use uns_resolver_domain::{DomainQuery, LookupOutcome, ResolvedAddress, SupportedTlds};

/// Orchestrates a single name-lookup: TLD gate, registry resolution, chain
/// address mapping. Never errors; every failure path degrades to a
/// non-`Resolved` outcome, which the host reads as "no opinion".
pub struct LookupDomainUseCase {
    registry: Arc<dyn RegistryPort>,
    tlds: Arc<dyn TldRepository>,
}

impl LookupDomainUseCase {
    pub fn new(registry: Arc<dyn RegistryPort>, tlds: Arc<dyn TldRepository>) -> Self {
        Self { registry, tlds }
    }

    pub async fn execute(&self, query: &DomainQuery) -> LookupOutcome {
        if query.domain.is_empty() {
            return LookupOutcome::EmptyDomain;
        }

        let mut tlds = self.tlds.load().await;
        if tlds.is_empty() {
            tlds = self.bootstrap_tlds().await;
        }

        if !tlds.matches(&query.domain) {
            return LookupOutcome::UnsupportedTld;
        }

        let records = match self.registry.resolve(&query.domain).await {
            Ok(records) => records,
            Err(e) => {
                warn!(domain = %query.domain, error = %e, "Registry resolution failed");
                return LookupOutcome::RegistryUnavailable;
            }
        };

        let Some(rule) = address_rules::rule_for(&query.chain_id) else {
            debug!(chain_id = %query.chain_id, "No address rule for chain");
            return LookupOutcome::UnknownChain;
        };

        match rule.extract(&records) {
            Some(address) => {
                LookupOutcome::Resolved(ResolvedAddress::new(address, query.domain.clone()))
            }
            None => {
                debug!(
                    domain = %query.domain,
                    chain_id = %query.chain_id,
                    "Record set holds no address for chain"
                );
                LookupOutcome::NoAddressRecord
            }
        }
    }

    /// One-time fetch-and-cache when the stored set is empty. If the fetch
    /// fails the gate runs against the empty set, so the lookup quietly
    /// reports the domain as unsupported this time around.
    async fn bootstrap_tlds(&self) -> SupportedTlds {
        match self.registry.supported_tlds().await {
            Ok(fetched) => {
                let set = SupportedTlds::new(fetched);
                if let Err(e) = self.tlds.save(&set).await {
                    warn!(error = %e, "Failed to persist bootstrapped TLD list");
                }
                set
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch supported TLD list");
                SupportedTlds::default()
            }
        }
    }
}
