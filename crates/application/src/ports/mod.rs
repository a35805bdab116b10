mod notifier;
mod registry;
mod tld_repository;

pub use notifier::Notifier;
pub use registry::RegistryPort;
pub use tld_repository::TldRepository;

// Re-export for convenience
pub use uns_resolver_domain::RecordSet;
