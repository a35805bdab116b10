use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Registry unreachable: {0}")]
    RegistryUnavailable(String),

    #[error("Registry returned HTTP {0}")]
    RegistryStatus(u16),

    #[error("Malformed registry response: {0}")]
    RegistryMalformed(String),

    #[error("State store error: {0}")]
    StateStore(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
