pub mod lookup_domain;
pub mod sync_tlds;

pub use lookup_domain::LookupDomainUseCase;
pub use sync_tlds::SyncTldsUseCase;
