pub mod runner;
pub mod tld_sync;

pub use runner::JobRunner;
pub use tld_sync::TldSyncJob;
