//! UNS Resolver Domain Layer
pub mod address_rules;
pub mod config;
pub mod errors;
pub mod lookup;
pub mod tld;

pub use address_rules::{resolve_address, ChainAddressRule};
pub use config::Config;
pub use errors::DomainError;
pub use lookup::{DomainQuery, LookupOutcome, RecordSet, ResolvedAddress};
pub use tld::{SupportedTlds, EXPECTED_TLD_COUNT};
