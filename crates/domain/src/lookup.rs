use serde::Serialize;
use std::collections::HashMap;

/// Protocol label reported back to the host on every successful resolution.
pub const PROTOCOL_LABEL: &str = "Unstoppable Domains";

/// Raw key/value record set the registry holds for a domain. Absent keys are
/// the norm; no shape is imposed beyond string-to-string.
pub type RecordSet = HashMap<String, String>;

/// A single name-lookup attempt as the host hands it over.
#[derive(Debug, Clone)]
pub struct DomainQuery {
    /// Chain identifier of the form `eip155:<numeric-id>`.
    pub chain_id: String,
    /// Caller-cased domain string; not guaranteed to contain a dot.
    pub domain: String,
}

impl DomainQuery {
    pub fn new(chain_id: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            domain: domain.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAddress {
    pub resolved_address: String,
    pub protocol: String,
    /// The queried domain in its original casing.
    pub domain_name: String,
}

impl ResolvedAddress {
    pub fn new(resolved_address: impl Into<String>, domain_name: impl Into<String>) -> Self {
        Self {
            resolved_address: resolved_address.into(),
            protocol: PROTOCOL_LABEL.to_string(),
            domain_name: domain_name.into(),
        }
    }
}

/// Outcome of a lookup. The host only ever sees `Resolved` vs `None`, but the
/// non-resolved variants stay distinct so the unsupported-input and
/// transient-failure paths can be told apart in tests and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Resolved(ResolvedAddress),
    EmptyDomain,
    UnsupportedTld,
    UnknownChain,
    NoAddressRecord,
    RegistryUnavailable,
}

impl LookupOutcome {
    pub fn into_resolved(self) -> Option<ResolvedAddress> {
        match self {
            Self::Resolved(address) => Some(address),
            _ => None,
        }
    }
}
