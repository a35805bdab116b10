use std::sync::Arc;
use uns_resolver_application::use_cases::{LookupDomainUseCase, SyncTldsUseCase};

#[derive(Clone)]
pub struct HostState {
    pub lookup: Arc<LookupDomainUseCase>,
    pub sync_tlds: Arc<SyncTldsUseCase>,
}
