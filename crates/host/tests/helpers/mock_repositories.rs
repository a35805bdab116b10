#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uns_resolver_application::ports::{Notifier, RegistryPort, TldRepository};
use uns_resolver_application::use_cases::{LookupDomainUseCase, SyncTldsUseCase};
use uns_resolver_domain::{DomainError, RecordSet, SupportedTlds};
use uns_resolver_host::HostState;

pub struct MockTldRepository {
    tlds: RwLock<SupportedTlds>,
    save_count: AtomicUsize,
}

impl MockTldRepository {
    pub fn with_tlds(tlds: &[&str]) -> Self {
        Self {
            tlds: RwLock::new(SupportedTlds::new(
                tlds.iter().map(|s| s.to_string()).collect(),
            )),
            save_count: AtomicUsize::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TldRepository for MockTldRepository {
    async fn load(&self) -> SupportedTlds {
        self.tlds.read().await.clone()
    }

    async fn save(&self, tlds: &SupportedTlds) -> Result<(), DomainError> {
        self.save_count.fetch_add(1, Ordering::SeqCst);
        *self.tlds.write().await = tlds.clone();
        Ok(())
    }
}

pub struct MockRegistry {
    tld_response: RwLock<Option<Vec<String>>>,
    records: RwLock<HashMap<String, RecordSet>>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            tld_response: RwLock::new(None),
            records: RwLock::new(HashMap::new()),
        }
    }

    pub async fn set_tlds(&self, tlds: &[&str]) {
        *self.tld_response.write().await = Some(tlds.iter().map(|s| s.to_string()).collect());
    }

    pub async fn set_records(&self, domain: &str, entries: &[(&str, &str)]) {
        let records = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.records.write().await.insert(domain.to_string(), records);
    }
}

#[async_trait]
impl RegistryPort for MockRegistry {
    async fn supported_tlds(&self) -> Result<Vec<String>, DomainError> {
        match self.tld_response.read().await.clone() {
            Some(tlds) => Ok(tlds),
            None => Err(DomainError::RegistryUnavailable(
                "mock registry offline".to_string(),
            )),
        }
    }

    async fn resolve(&self, domain: &str) -> Result<RecordSet, DomainError> {
        match self.records.read().await.get(domain).cloned() {
            Some(records) => Ok(records),
            None => Err(DomainError::RegistryStatus(404)),
        }
    }
}

pub struct MockNotifier {
    count: AtomicUsize,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            count: AtomicUsize::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, _message: &str) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn host_state(
    registry: Arc<MockRegistry>,
    repo: Arc<MockTldRepository>,
    notifier: Arc<MockNotifier>,
) -> HostState {
    HostState {
        lookup: Arc::new(LookupDomainUseCase::new(registry.clone(), repo.clone())),
        sync_tlds: Arc::new(SyncTldsUseCase::new(registry, repo, notifier)),
    }
}
