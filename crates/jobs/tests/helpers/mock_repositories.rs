#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uns_resolver_application::ports::{Notifier, RegistryPort, TldRepository};
use uns_resolver_domain::{DomainError, RecordSet, SupportedTlds};

pub struct MockTldRepository {
    tlds: RwLock<SupportedTlds>,
    save_count: AtomicUsize,
}

impl MockTldRepository {
    pub fn new() -> Self {
        Self {
            tlds: RwLock::new(SupportedTlds::default()),
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
}

impl MockRegistry {
    pub fn new() -> Self {
        Self {
            tld_response: RwLock::new(None),
        }
    }

    pub async fn set_tlds(&self, tlds: Vec<String>) {
        *self.tld_response.write().await = Some(tlds);
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

    async fn resolve(&self, _domain: &str) -> Result<RecordSet, DomainError> {
        Err(DomainError::RegistryStatus(404))
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
