//! Host-facing adapter: the wallet runtime's two entry points and their
//! request/response shapes.
pub mod dto;
pub mod handlers;
pub mod state;

pub use dto::{CronjobRequest, NameLookupRequest, NameLookupResponse};
pub use handlers::{on_cronjob, on_name_lookup};
pub use state::HostState;
