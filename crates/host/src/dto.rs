use serde::{Deserialize, Serialize};
use uns_resolver_domain::{DomainQuery, ResolvedAddress};

/// A name-lookup invocation as the wallet host sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameLookupRequest {
    pub chain_id: String,
    #[serde(default)]
    pub domain: String,
}

impl From<NameLookupRequest> for DomainQuery {
    fn from(request: NameLookupRequest) -> Self {
        DomainQuery::new(request.chain_id, request.domain)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameLookupResponse {
    pub resolved_addresses: Vec<ResolvedAddress>,
}

/// A scheduled-task invocation. Only the `"execute"` method exists.
#[derive(Debug, Clone, Deserialize)]
pub struct CronjobRequest {
    pub method: String,
}
