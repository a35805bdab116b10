use super::debounce::Debouncer;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use uns_resolver_application::ports::RegistryPort;
use uns_resolver_domain::config::RegistryConfig;
use uns_resolver_domain::{DomainError, RecordSet};

#[derive(Deserialize)]
struct SupportedTldsBody {
    tlds: Vec<String>,
}

#[derive(Deserialize)]
struct DomainRecordsBody {
    records: RecordSet,
}

/// Unstoppable Domains REST client. Domain resolutions go through a
/// per-domain trailing-edge debouncer so keystroke-driven lookup bursts
/// collapse into one outbound request; the TLD list fetch does not.
pub struct HttpRegistryClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    debouncer: Debouncer<Result<RecordSet, DomainError>>,
}

impl HttpRegistryClient {
    pub fn new(config: &RegistryConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::ConfigError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            debouncer: Debouncer::new(Duration::from_millis(config.debounce_ms)),
        })
    }

    async fn fetch_records(&self, domain: &str) -> Result<RecordSet, DomainError> {
        let url = format!("{}/resolve/domains/{}", self.base_url, domain);
        debug!(%url, "Fetching domain records");

        let mut request = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::RegistryUnavailable(e.to_string()))?;
        if !response.status().is_success() {
            return Err(DomainError::RegistryStatus(response.status().as_u16()));
        }

        let body: DomainRecordsBody = response
            .json()
            .await
            .map_err(|e| DomainError::RegistryMalformed(e.to_string()))?;
        Ok(body.records)
    }
}

#[async_trait]
impl RegistryPort for HttpRegistryClient {
    async fn supported_tlds(&self) -> Result<Vec<String>, DomainError> {
        let url = format!("{}/resolve/supported_tlds", self.base_url);
        debug!(%url, "Fetching supported TLD list");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::RegistryUnavailable(e.to_string()))?;
        if !response.status().is_success() {
            return Err(DomainError::RegistryStatus(response.status().as_u16()));
        }

        let body: SupportedTldsBody = response
            .json()
            .await
            .map_err(|e| DomainError::RegistryMalformed(e.to_string()))?;
        Ok(body.tlds)
    }

    async fn resolve(&self, domain: &str) -> Result<RecordSet, DomainError> {
        self.debouncer.run(domain, self.fetch_records(domain)).await
    }
}
