use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;
use uns_resolver_application::ports::TldRepository;
use uns_resolver_domain::{DomainError, SupportedTlds};

/// On-disk shape of the cached state: `{ "tlds": [...] }`, unencrypted.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default)]
    tlds: Vec<String>,
}

/// TLD cache backed by a JSON file. Anything unreadable loads as the empty
/// set; the sync cycle or the next lookup's bootstrap repopulates it.
pub struct FileTldRepository {
    path: PathBuf,
}

impl FileTldRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TldRepository for FileTldRepository {
    async fn load(&self) -> SupportedTlds {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(_) => return SupportedTlds::default(),
        };

        match serde_json::from_slice::<StateFile>(&raw) {
            Ok(state) => SupportedTlds::new(state.tlds),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Stored TLD state has an invalid shape, treating as empty"
                );
                SupportedTlds::default()
            }
        }
    }

    async fn save(&self, tlds: &SupportedTlds) -> Result<(), DomainError> {
        let state = StateFile {
            tlds: tlds.as_slice().to_vec(),
        };
        let raw =
            serde_json::to_vec(&state).map_err(|e| DomainError::StateStore(e.to_string()))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| DomainError::StateStore(e.to_string()))
    }
}
