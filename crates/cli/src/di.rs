use std::sync::Arc;
use uns_resolver_application::use_cases::{LookupDomainUseCase, SyncTldsUseCase};
use uns_resolver_domain::{Config, DomainError};
use uns_resolver_host::HostState;
use uns_resolver_infrastructure::{FileTldRepository, HttpRegistryClient, LogNotifier};

pub fn build_state(config: &Config) -> Result<HostState, DomainError> {
    let registry = Arc::new(HttpRegistryClient::new(&config.registry)?);
    let tlds = Arc::new(FileTldRepository::new(&config.state.path));
    let notifier = Arc::new(LogNotifier);

    Ok(HostState {
        lookup: Arc::new(LookupDomainUseCase::new(registry.clone(), tlds.clone())),
        sync_tlds: Arc::new(SyncTldsUseCase::new(registry, tlds, notifier)),
    })
}
