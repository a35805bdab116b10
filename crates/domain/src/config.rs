pub mod errors;
pub mod logging;
pub mod registry;
pub mod root;
pub mod state;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use registry::RegistryConfig;
pub use root::Config;
pub use state::StateConfig;
