#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uns_resolver_application::ports::{Notifier, RegistryPort, TldRepository};
use uns_resolver_domain::{DomainError, RecordSet, SupportedTlds};

pub struct MockTldRepository {
    tlds: RwLock<SupportedTlds>,
    save_count: AtomicUsize,
    fail_save: RwLock<bool>,
}

impl MockTldRepository {
    pub fn new() -> Self {
        Self {
            tlds: RwLock::new(SupportedTlds::default()),
            save_count: AtomicUsize::new(0),
            fail_save: RwLock::new(false),
        }
    }

    pub fn with_tlds(tlds: &[&str]) -> Self {
        let repo = Self::new();
        *repo.tlds.try_write().unwrap() =
            SupportedTlds::new(tlds.iter().map(|s| s.to_string()).collect());
        repo
    }

    pub async fn set_fail_save(&self, fail: bool) {
        *self.fail_save.write().await = fail;
    }

    pub async fn stored(&self) -> SupportedTlds {
        self.tlds.read().await.clone()
    }

    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }
}

impl Default for MockTldRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TldRepository for MockTldRepository {
    async fn load(&self) -> SupportedTlds {
        self.tlds.read().await.clone()
    }

    async fn save(&self, tlds: &SupportedTlds) -> Result<(), DomainError> {
        if *self.fail_save.read().await {
            return Err(DomainError::StateStore("mock save failure".to_string()));
        }
        self.save_count.fetch_add(1, Ordering::SeqCst);
        *self.tlds.write().await = tlds.clone();
        Ok(())
    }
}

pub struct MockRegistry {
    tld_response: RwLock<Option<Vec<String>>>,
    records: RwLock<HashMap<String, RecordSet>>,
    fail_resolve: RwLock<bool>,
    tld_fetches: AtomicUsize,
    resolve_calls: AtomicUsize,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            tld_response: RwLock::new(None),
            records: RwLock::new(HashMap::new()),
            fail_resolve: RwLock::new(false),
            tld_fetches: AtomicUsize::new(0),
            resolve_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_tlds(tlds: &[&str]) -> Self {
        let registry = Self::new();
        *registry.tld_response.try_write().unwrap() =
            Some(tlds.iter().map(|s| s.to_string()).collect());
        registry
    }

    pub async fn set_tlds(&self, tlds: Vec<String>) {
        *self.tld_response.write().await = Some(tlds);
    }

    /// `None` makes the next TLD fetch fail.
    pub async fn set_tlds_unavailable(&self) {
        *self.tld_response.write().await = None;
    }

    pub async fn set_records(&self, domain: &str, entries: &[(&str, &str)]) {
        let records = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.records.write().await.insert(domain.to_string(), records);
    }

    pub async fn set_fail_resolve(&self, fail: bool) {
        *self.fail_resolve.write().await = fail;
    }

    pub fn tld_fetches(&self) -> usize {
        self.tld_fetches.load(Ordering::SeqCst)
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistryPort for MockRegistry {
    async fn supported_tlds(&self) -> Result<Vec<String>, DomainError> {
        self.tld_fetches.fetch_add(1, Ordering::SeqCst);
        match self.tld_response.read().await.clone() {
            Some(tlds) => Ok(tlds),
            None => Err(DomainError::RegistryUnavailable(
                "mock registry offline".to_string(),
            )),
        }
    }

    async fn resolve(&self, domain: &str) -> Result<RecordSet, DomainError> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_resolve.read().await {
            return Err(DomainError::RegistryUnavailable(
                "mock registry offline".to_string(),
            ));
        }
        match self.records.read().await.get(domain).cloned() {
            Some(records) => Ok(records),
            None => Err(DomainError::RegistryStatus(404)),
        }
    }
}

pub struct MockNotifier {
    messages: RwLock<Vec<String>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
        }
    }

    pub async fn messages(&self) -> Vec<String> {
        self.messages.read().await.clone()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, message: &str) {
        self.messages.write().await.push(message.to_string());
    }
}

pub fn arcs() -> (Arc<MockRegistry>, Arc<MockTldRepository>, Arc<MockNotifier>) {
    (
        Arc::new(MockRegistry::new()),
        Arc::new(MockTldRepository::new()),
        Arc::new(MockNotifier::new()),
    )
}
