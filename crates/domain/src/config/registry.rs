use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Base URL of the Unstoppable Domains resolution API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token for the domain-resolution endpoint. The `UNS_API_KEY`
    /// environment variable takes precedence over the file value.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Trailing-edge debounce window applied to per-domain resolution calls.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Outbound HTTP timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            debounce_ms: default_debounce_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.unstoppabledomains.com".to_string()
}

fn default_debounce_ms() -> u64 {
    600
}

fn default_timeout_secs() -> u64 {
    30
}
