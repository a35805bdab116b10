mod debounce;
mod http_client;

pub use debounce::Debouncer;
pub use http_client::HttpRegistryClient;
