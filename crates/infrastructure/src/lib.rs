//! UNS Resolver Infrastructure Layer
pub mod notify;
pub mod registry;
pub mod state;

pub use notify::LogNotifier;
pub use registry::HttpRegistryClient;
pub use state::FileTldRepository;
