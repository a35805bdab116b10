use crate::dto::{CronjobRequest, NameLookupRequest, NameLookupResponse};
use crate::state::HostState;
use tracing::{debug, warn};
use uns_resolver_domain::{DomainError, DomainQuery, LookupOutcome};

/// Entry point for every host name-lookup attempt. `None` means "this
/// adapter has no opinion" and the host falls through to other resolvers;
/// it is never an error.
pub async fn on_name_lookup(
    state: &HostState,
    request: NameLookupRequest,
) -> Option<NameLookupResponse> {
    let query = DomainQuery::from(request);
    match state.lookup.execute(&query).await {
        LookupOutcome::Resolved(address) => Some(NameLookupResponse {
            resolved_addresses: vec![address],
        }),
        outcome => {
            debug!(
                domain = %query.domain,
                chain_id = %query.chain_id,
                ?outcome,
                "Lookup yielded no address"
            );
            None
        }
    }
}

/// Scheduled-task entry point. A failing registry is absorbed (the next
/// scheduled run is the retry); an unknown method is a host programming
/// error and is the one failure allowed to surface.
pub async fn on_cronjob(state: &HostState, request: CronjobRequest) -> Result<(), DomainError> {
    match request.method.as_str() {
        "execute" => {
            if let Err(e) = state.sync_tlds.execute().await {
                warn!(error = %e, "Scheduled TLD refresh failed");
            }
            Ok(())
        }
        other => Err(DomainError::MethodNotFound(other.to_string())),
    }
}
